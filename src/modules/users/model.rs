//! User data models and DTOs.
//!
//! Users are keyed by email. Everyone registers as a student; admins
//! promote accounts to instructor or admin afterwards. Accounts are
//! never deleted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Role of a user. Gates route access via the policy table; comparisons
/// are exact, with no hierarchy between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
        };
        f.write_str(slug)
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Registration payload. The role is always `student` initially.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub photo_url: Option<String>,
}

/// Outcome of a registration attempt. A duplicate email answers with a
/// "user already exists" message and performs no insert.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RegisterOutcome {
    Created(User),
    AlreadyRegistered { message: String },
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}
