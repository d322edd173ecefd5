use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A completed payment. Immutable once recorded; amounts are in minor
/// units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub student_email: String,
    pub amount: i64,
    pub currency: String,
    pub class_id: Option<Uuid>,
    pub selection_id: Option<Uuid>,
    pub class_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Payload for starting a payment. The price is in major units; the
/// intent is created for `round(price * 100)` minor units of USD.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateIntentDto {
    #[validate(range(min = 0.0))]
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// Payload recording a confirmed payment. Sent by the client after the
/// processor accepts the charge; separate from marking the selection
/// paid, with no transaction spanning the two.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentDto {
    #[validate(range(min = 0))]
    pub amount: i64,
    #[validate(length(min = 1))]
    pub currency: String,
    pub class_id: Option<Uuid>,
    pub selection_id: Option<Uuid>,
    pub class_name: Option<String>,
}
