use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Activity, ActivityName};

pub mod seed;

/// Why a signup was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
}

/// Process-wide activity store. Cheap to clone; all clones share the same
/// underlying map. Built once at startup and handed to handlers as axum
/// state, so tests construct isolated instances instead of resetting a
/// shared global.
#[derive(Clone)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<BTreeMap<ActivityName, Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: BTreeMap<ActivityName, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Registry pre-loaded with the fixed startup roster. Nothing is
    /// persisted; every process start goes back to this state.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    /// Point-in-time copy of the full map.
    pub async fn snapshot(&self) -> BTreeMap<ActivityName, Activity> {
        self.inner.read().await.clone()
    }

    /// Appends `email` to the roster of `name`.
    ///
    /// The existence check, the duplicate check and the append all happen
    /// under one write-lock acquisition, so concurrent signups never admit
    /// the same email twice and never lose each other's appends. Capacity
    /// is not checked: a full activity still accepts signups.
    pub async fn signup(&self, name: &ActivityName, email: &str) -> Result<(), SignupError> {
        let mut activities = self.inner.write().await;
        let activity = activities.get_mut(name).ok_or(SignupError::NotFound)?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }
}
