use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::{
    Class, ClassFilterParams, CreateClassDto, UpdateClassDto, UpdateFeedbackDto, UpdateStatusDto,
};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a class (instructor only)
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created with pending status", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn create_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(&state.db, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List all classes, optionally filtered by status (admin only)
#[utoipa::path(
    get,
    path = "/api/classes",
    params(ClassFilterParams),
    responses(
        (status = 200, description = "List of classes", body = Vec<Class>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(filters): Query<ClassFilterParams>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes(&state.db, filters).await?;
    Ok(Json(classes))
}

/// List approved classes (public)
#[utoipa::path(
    get,
    path = "/api/classes/approved",
    responses(
        (status = 200, description = "Classes approved for booking", body = Vec<Class>)
    ),
    tag = "Classes"
)]
#[instrument]
pub async fn get_approved_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_approved_classes(&state.db).await?;
    Ok(Json(classes))
}

/// List the caller's own classes (instructor only)
#[utoipa::path(
    get,
    path = "/api/classes/mine",
    responses(
        (status = 200, description = "Caller's classes", body = Vec<Class>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn get_my_classes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_instructor(&state.db, auth_user.email()).await?;
    Ok(Json(classes))
}

/// Fetch one class (instructor only)
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class id")),
    responses(
        (status = 200, description = "The class", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::get_class(&state.db, id).await?;
    Ok(Json(class))
}

/// Update a class's details (owning instructor only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own this class", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn update_class(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::update_class(&state.db, id, auth_user.email(), dto).await?;
    Ok(Json(class))
}

/// Approve or deny a class (admin only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}/status",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn set_class_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateStatusDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::set_status(&state.db, id, dto.status).await?;
    Ok(Json(class))
}

/// Leave feedback on a class (admin only)
#[utoipa::path(
    patch,
    path = "/api/classes/{id}/feedback",
    params(("id" = Uuid, Path, description = "Class id")),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument]
pub async fn set_class_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFeedbackDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::set_feedback(&state.db, id, &dto.feedback).await?;
    Ok(Json(class))
}
