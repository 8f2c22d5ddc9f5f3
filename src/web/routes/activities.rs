use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::{Activity, ActivityName};
use crate::registry::ActivityRegistry;
use crate::services::activities_service;

pub async fn activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<BTreeMap<ActivityName, Activity>> {
    Json(activities_service::list_activities(&registry).await)
}
