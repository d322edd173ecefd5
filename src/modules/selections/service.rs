use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::service::ClassService;
use crate::modules::selections::model::{PaymentState, SelectOutcome, Selection};
use crate::utils::errors::AppError;

const SELECTION_COLUMNS: &str =
    "id, student_email, class_id, class_name, payment_status, created_at";

pub struct SelectionService;

impl SelectionService {
    #[instrument(skip(db))]
    pub async fn get_selections_for_student(
        db: &PgPool,
        student_email: &str,
    ) -> Result<Vec<Selection>, AppError> {
        let selections = sqlx::query_as::<_, Selection>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selections WHERE student_email = $1 ORDER BY created_at DESC",
        ))
        .bind(student_email)
        .fetch_all(db)
        .await?;

        Ok(selections)
    }

    /// Selects a class for a student. The check is by class *name*: a
    /// student cannot hold two selections for the same class name, even
    /// across distinct class records.
    #[instrument(skip(db))]
    pub async fn create_selection(
        db: &PgPool,
        student_email: &str,
        class_id: Uuid,
    ) -> Result<SelectOutcome, AppError> {
        let class = ClassService::get_class(db, class_id).await?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM selections WHERE student_email = $1 AND class_name = $2",
        )
        .bind(student_email)
        .bind(&class.name)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Ok(SelectOutcome::AlreadyAdded {
                message: "Class already added".to_string(),
            });
        }

        let selection = sqlx::query_as::<_, Selection>(&format!(
            r#"INSERT INTO selections (student_email, class_id, class_name)
               VALUES ($1, $2, $3)
               RETURNING {SELECTION_COLUMNS}"#,
        ))
        .bind(student_email)
        .bind(class.id)
        .bind(&class.name)
        .fetch_one(db)
        .await?;

        Ok(SelectOutcome::Created(selection))
    }

    #[instrument(skip(db))]
    pub async fn get_selection(
        db: &PgPool,
        id: Uuid,
        caller_email: &str,
    ) -> Result<Selection, AppError> {
        let selection = sqlx::query_as::<_, Selection>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selections WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Selection with id {} not found", id))
        })?;

        if selection.student_email != caller_email {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Selection belongs to another student"
            )));
        }

        Ok(selection)
    }

    #[instrument(skip(db))]
    pub async fn delete_selection(
        db: &PgPool,
        id: Uuid,
        caller_email: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM selections WHERE id = $1 AND student_email = $2")
            .bind(id)
            .bind(caller_email)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Selection with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Marks a selection paid. Touches only `payment_status`; the
    /// corresponding payment record arrives on a separate request with
    /// no transaction spanning the two.
    #[instrument(skip(db))]
    pub async fn mark_paid(db: &PgPool, id: Uuid) -> Result<Selection, AppError> {
        let selection = sqlx::query_as::<_, Selection>(&format!(
            "UPDATE selections SET payment_status = $2 WHERE id = $1 RETURNING {SELECTION_COLUMNS}",
        ))
        .bind(id)
        .bind(PaymentState::Paid)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Selection with id {} not found", id))
        })?;

        Ok(selection)
    }
}
