use std::collections::BTreeMap;

use crate::models::{Activity, ActivityName};
use crate::registry::ActivityRegistry;

/// Full name -> record view for the activities listing. No filtering, no
/// pagination; the handler serializes it verbatim.
pub async fn list_activities(registry: &ActivityRegistry) -> BTreeMap<ActivityName, Activity> {
    registry.snapshot().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listing_is_an_idempotent_read() {
        let registry = ActivityRegistry::seeded();

        let first = list_activities(&registry).await;
        let second = list_activities(&registry).await;

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap(),
        );
    }
}
