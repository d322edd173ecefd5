//! Class data models and DTOs.
//!
//! A class is created by an instructor and starts out `pending` with
//! feedback `"none"`. Admins move it to `approved` or `denied` and may
//! leave feedback; only the owning instructor edits its details.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "class_status", rename_all = "lowercase")]
pub enum ClassStatus {
    Pending,
    Approved,
    Denied,
}

/// A bookable sports class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub image_url: Option<String>,
    pub available_seats: i32,
    pub price: f64,
    pub status: ClassStatus,
    pub feedback: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for creating a class. The instructor email comes from the
/// caller's token, never from the body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub instructor_name: String,
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub available_seats: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Partial update of a class's own details, restricted to the owning
/// instructor. Status and feedback have their own admin-only routes.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateClassDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub available_seats: Option<i32>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: ClassStatus,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateFeedbackDto {
    #[validate(length(min = 1))]
    pub feedback: String,
}

/// Query parameters for the admin class listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ClassFilterParams {
    pub status: Option<ClassStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ClassStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(
            serde_json::to_string(&ClassStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(serde_json::to_string(&ClassStatus::Denied).unwrap(), "\"denied\"");
    }

    #[test]
    fn test_create_dto_rejects_negative_seats() {
        let dto = CreateClassDto {
            name: "Junior Karate".to_string(),
            instructor_name: "Kim Lee".to_string(),
            image_url: None,
            available_seats: -1,
            price: 25.0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_all_fields_optional() {
        let dto: UpdateClassDto = serde_json::from_str("{}").unwrap();
        assert!(dto.name.is_none());
        assert!(dto.available_seats.is_none());
        assert!(dto.price.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_status_dto_rejects_unknown_status() {
        let result: Result<UpdateStatusDto, _> =
            serde_json::from_str(r#"{"status":"archived"}"#);
        assert!(result.is_err());
    }
}
