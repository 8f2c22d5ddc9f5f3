use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::ActivityName;
use crate::registry::{ActivityRegistry, SignupError};
use crate::services::signup_service::{self, SignupConfirmation};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<SignupConfirmation>, (StatusCode, Json<Value>)> {
    let name = ActivityName::from(activity_name);

    match signup_service::signup_student(&registry, &name, &query.email).await {
        Ok(confirmation) => Ok(Json(confirmation)),
        Err(e) => {
            warn!(activity = %name, "signup refused: {}", e);
            let status = match e {
                SignupError::NotFound => StatusCode::NOT_FOUND,
                SignupError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            };
            Err((status, Json(json!({ "detail": e.to_string() }))))
        }
    }
}
