use sqlx::PgPool;
use tracing::instrument;

use crate::modules::payments::gateway::PaymentGateway;
use crate::modules::payments::model::{
    CreateIntentDto, CreateIntentResponse, Payment, RecordPaymentDto,
};
use crate::utils::errors::AppError;

const PAYMENT_COLUMNS: &str =
    "id, student_email, amount, currency, class_id, selection_id, class_name, created_at";

pub struct PaymentService;

impl PaymentService {
    /// Step one of the two-phase payment flow: create a processor-side
    /// intent for `round(price * 100)` minor units of USD and hand the
    /// client secret back for client-side confirmation. Nothing is
    /// persisted here.
    #[instrument(skip(gateway))]
    pub async fn create_intent(
        gateway: &dyn PaymentGateway,
        dto: CreateIntentDto,
    ) -> Result<CreateIntentResponse, AppError> {
        let amount = (dto.price * 100.0).round() as i64;

        let intent = gateway
            .create_intent(amount, "usd")
            .await
            .map_err(AppError::bad_gateway)?;

        Ok(CreateIntentResponse {
            client_secret: intent.client_secret,
        })
    }

    /// Step two: persist the payment record. The matching selection is
    /// marked paid by a separate request; a failure between the two
    /// leaves a charge with no paid selection and no reconciliation runs.
    #[instrument(skip(db))]
    pub async fn record_payment(
        db: &PgPool,
        student_email: &str,
        dto: RecordPaymentDto,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(&format!(
            r#"INSERT INTO payments (student_email, amount, currency, class_id, selection_id, class_name)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {PAYMENT_COLUMNS}"#,
        ))
        .bind(student_email)
        .bind(dto.amount)
        .bind(&dto.currency)
        .bind(dto.class_id)
        .bind(dto.selection_id)
        .bind(&dto.class_name)
        .fetch_one(db)
        .await?;

        Ok(payment)
    }

    #[instrument(skip(db))]
    pub async fn get_payments_for_student(
        db: &PgPool,
        student_email: &str,
    ) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE student_email = $1 ORDER BY created_at DESC",
        ))
        .bind(student_email)
        .fetch_all(db)
        .await?;

        Ok(payments)
    }
}
