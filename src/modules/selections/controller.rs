use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::selections::model::{CreateSelectionDto, SelectOutcome, Selection};
use crate::modules::selections::service::SelectionService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List the caller's selections
#[utoipa::path(
    get,
    path = "/api/selections",
    responses(
        (status = 200, description = "Caller's selections", body = Vec<Selection>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument]
pub async fn get_selections(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Selection>>, AppError> {
    let selections =
        SelectionService::get_selections_for_student(&state.db, auth_user.email()).await?;
    Ok(Json(selections))
}

/// Select a class for the caller
#[utoipa::path(
    post,
    path = "/api/selections",
    request_body = CreateSelectionDto,
    responses(
        (status = 200, description = "Selection created, or already-added message", body = SelectOutcome),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument]
pub async fn create_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateSelectionDto>,
) -> Result<Json<SelectOutcome>, AppError> {
    let outcome =
        SelectionService::create_selection(&state.db, auth_user.email(), dto.class_id).await?;
    Ok(Json(outcome))
}

/// Fetch one of the caller's selections
#[utoipa::path(
    get,
    path = "/api/selections/{id}",
    params(("id" = Uuid, Path, description = "Selection id")),
    responses(
        (status = 200, description = "The selection", body = Selection),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Selection belongs to another student", body = ErrorResponse),
        (status = 404, description = "Selection not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument]
pub async fn get_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Selection>, AppError> {
    let selection = SelectionService::get_selection(&state.db, id, auth_user.email()).await?;
    Ok(Json(selection))
}

/// Cancel a selection
#[utoipa::path(
    delete,
    path = "/api/selections/{id}",
    params(("id" = Uuid, Path, description = "Selection id")),
    responses(
        (status = 204, description = "Selection cancelled"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Selection not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument]
pub async fn delete_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    SelectionService::delete_selection(&state.db, id, auth_user.email()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a selection paid
///
/// Called by the client after the processor confirms the charge. Only
/// `payment_status` changes; recording the payment itself is a separate
/// request with no transaction spanning the two.
#[utoipa::path(
    patch,
    path = "/api/selections/{id}",
    params(("id" = Uuid, Path, description = "Selection id")),
    responses(
        (status = 200, description = "Updated selection", body = Selection),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Selection not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument]
pub async fn mark_selection_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Selection>, AppError> {
    let selection = SelectionService::mark_paid(&state.db, id).await?;
    Ok(Json(selection))
}
