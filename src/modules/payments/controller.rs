use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::payments::model::{
    CreateIntentDto, CreateIntentResponse, Payment, RecordPaymentDto,
};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a payment intent with the processor
#[utoipa::path(
    post,
    path = "/api/payments/intent",
    request_body = CreateIntentDto,
    responses(
        (status = 200, description = "Client secret for client-side confirmation", body = CreateIntentResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Payment processor failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateIntentDto>,
) -> Result<Json<CreateIntentResponse>, AppError> {
    let response = PaymentService::create_intent(state.gateway.as_ref(), dto).await?;
    Ok(Json(response))
}

/// Record a confirmed payment
#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = RecordPaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument]
pub async fn record_payment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RecordPaymentDto>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let payment = PaymentService::record_payment(&state.db, auth_user.email(), dto).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// List the caller's payments, newest first
#[utoipa::path(
    get,
    path = "/api/payments",
    responses(
        (status = 200, description = "Caller's payments in descending time order", body = Vec<Payment>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument]
pub async fn get_payments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments =
        PaymentService::get_payments_for_student(&state.db, auth_user.email()).await?;
    Ok(Json(payments))
}
