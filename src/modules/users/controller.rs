use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    AdminCheckResponse, InstructorCheckResponse, RegisterOutcome, RegisterUserDto, User, UserRole,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Register a new user (role defaults to student)
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User created, or already-exists message", body = RegisterOutcome),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<Json<RegisterOutcome>, AppError> {
    let outcome = UserService::register_user(&state.db, dto).await?;
    Ok(Json(outcome))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Check whether the caller is an admin
///
/// Asking about anyone other than yourself always answers `false`; the
/// role store is only consulted for the caller's own email.
#[utoipa::path(
    get,
    path = "/api/users/admin/{email}",
    params(("email" = String, Path, description = "Email to check; must be the caller's own")),
    responses(
        (status = 200, description = "Admin flag for the caller", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(AdminCheckResponse { admin: false }));
    }

    let role = state.roles.role_of(&email).await?;
    Ok(Json(AdminCheckResponse {
        admin: role == Some(UserRole::Admin),
    }))
}

/// Check whether the caller is an instructor
#[utoipa::path(
    get,
    path = "/api/users/instructor/{email}",
    params(("email" = String, Path, description = "Email to check; must be the caller's own")),
    responses(
        (status = 200, description = "Instructor flag for the caller", body = InstructorCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<InstructorCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorCheckResponse { instructor: false }));
    }

    let role = state.roles.role_of(&email).await?;
    Ok(Json(InstructorCheckResponse {
        instructor: role == Some(UserRole::Instructor),
    }))
}

/// Promote a user to admin
#[utoipa::path(
    patch,
    path = "/api/users/{id}/admin",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn promote_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::promote(&state.db, id, UserRole::Admin).await?;
    Ok(Json(user))
}

/// Promote a user to instructor
#[utoipa::path(
    patch,
    path = "/api/users/{id}/instructor",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn promote_instructor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::promote(&state.db, id, UserRole::Instructor).await?;
    Ok(Json(user))
}
