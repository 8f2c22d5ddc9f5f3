use serde::Serialize;
use tracing::info;

use crate::models::ActivityName;
use crate::registry::{ActivityRegistry, SignupError};

/// Payload returned to the client after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub async fn signup_student(
    registry: &ActivityRegistry,
    name: &ActivityName,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    registry.signup(name, email).await?;
    info!(activity = %name, email = %email, "signup accepted");

    Ok(SignupConfirmation {
        message: format!("Signed up {} for {}", email, name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirmation_names_student_and_activity() {
        let registry = ActivityRegistry::seeded();

        let confirmation = signup_student(
            &registry,
            &ActivityName::from("Chess Club"),
            "newstudent@mergington.edu",
        )
        .await
        .unwrap();

        assert!(confirmation.message.contains("newstudent@mergington.edu"));
        assert!(confirmation.message.contains("Chess Club"));
    }

    #[tokio::test]
    async fn registry_errors_pass_through() {
        let registry = ActivityRegistry::seeded();

        let err = signup_student(
            &registry,
            &ActivityName::from("Nonexistent Activity"),
            "x@y.edu",
        )
        .await
        .unwrap_err();

        assert_eq!(err, SignupError::NotFound);
    }
}
