use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{IssueTokenDto, TokenResponse};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Issue an access token for an email payload
#[utoipa::path(
    post,
    path = "/api/auth/token",
    request_body = IssueTokenDto,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 422, description = "Invalid email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IssueTokenDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::issue_token(dto, &state.jwt_config)?;
    Ok(Json(response))
}
