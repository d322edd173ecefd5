//! Selection data models and DTOs.
//!
//! A selection is a student's enrollment record for one class, starting
//! `unpaid` and marked `paid` after a successful payment. The class name
//! is snapshotted at selection time and is the key the duplicate check
//! runs against.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_state", rename_all = "lowercase")]
pub enum PaymentState {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Selection {
    pub id: Uuid,
    pub student_email: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub payment_status: PaymentState,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSelectionDto {
    pub class_id: Uuid,
}

/// Outcome of selecting a class. Selecting a class name the student has
/// already selected answers with a "Class already added" message and
/// performs no insert.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SelectOutcome {
    Created(Selection),
    AlreadyAdded { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PaymentState::Unpaid).unwrap(), "\"unpaid\"");
        assert_eq!(serde_json::to_string(&PaymentState::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_duplicate_outcome_shape() {
        let outcome = SelectOutcome::AlreadyAdded {
            message: "Class already added".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Class already added"}));
    }

    #[test]
    fn test_created_outcome_is_flat_selection() {
        let selection = Selection {
            id: Uuid::new_v4(),
            student_email: "kid@test.com".to_string(),
            class_id: Uuid::new_v4(),
            class_name: "Junior Karate".to_string(),
            payment_status: PaymentState::Unpaid,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(SelectOutcome::Created(selection)).unwrap();
        assert_eq!(json["class_name"], "Junior Karate");
        assert_eq!(json["payment_status"], "unpaid");
        assert!(json.get("message").is_none());
    }
}
