use std::collections::BTreeMap;

use crate::models::{Activity, ActivityName};

/// The fixed startup roster. The registry is rebuilt from this on every
/// process start.
pub fn seed_activities() -> BTreeMap<ActivityName, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        ActivityName::from("Chess Club"),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );

    activities.insert(
        ActivityName::from("Programming Class"),
        Activity {
            description: "Learn programming fundamentals and build software projects"
                .to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );

    activities.insert(
        ActivityName::from("Gym Class"),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );

    activities
}
