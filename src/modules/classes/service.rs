use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{
    Class, ClassFilterParams, ClassStatus, CreateClassDto, UpdateClassDto,
};
use crate::utils::errors::AppError;

const CLASS_COLUMNS: &str = "id, name, instructor_name, instructor_email, image_url, \
                             available_seats, price, status, feedback, created_at";

pub struct ClassService;

impl ClassService {
    /// Creates a class owned by `instructor_email`. New classes start
    /// `pending` with feedback `"none"` (column defaults).
    #[instrument(skip(db))]
    pub async fn create_class(
        db: &PgPool,
        instructor_email: &str,
        dto: CreateClassDto,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            r#"INSERT INTO classes (name, instructor_name, instructor_email, image_url, available_seats, price)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {CLASS_COLUMNS}"#,
        ))
        .bind(&dto.name)
        .bind(&dto.instructor_name)
        .bind(instructor_email)
        .bind(&dto.image_url)
        .bind(dto.available_seats)
        .bind(dto.price)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(
        db: &PgPool,
        filters: ClassFilterParams,
    ) -> Result<Vec<Class>, AppError> {
        let classes = match filters.status {
            Some(status) => {
                sqlx::query_as::<_, Class>(&format!(
                    "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1 ORDER BY created_at DESC",
                ))
                .bind(status)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Class>(&format!(
                    "SELECT {CLASS_COLUMNS} FROM classes ORDER BY created_at DESC",
                ))
                .fetch_all(db)
                .await?
            }
        };

        Ok(classes)
    }

    /// The public listing: only classes an admin has approved.
    #[instrument(skip(db))]
    pub async fn get_approved_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1 ORDER BY created_at DESC",
        ))
        .bind(ClassStatus::Approved)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_instructor(
        db: &PgPool,
        instructor_email: &str,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE instructor_email = $1 ORDER BY created_at DESC",
        ))
        .bind(instructor_email)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class(db: &PgPool, id: Uuid) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class with id {} not found", id)))?;

        Ok(class)
    }

    /// Updates a class's details. Only the owning instructor may do
    /// this; absent fields keep their current values.
    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &PgPool,
        id: Uuid,
        caller_email: &str,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        let existing = Self::get_class(db, id).await?;

        if existing.instructor_email != caller_email {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Only the owning instructor can update this class"
            )));
        }

        let name = dto.name.unwrap_or(existing.name);
        let image_url = dto.image_url.or(existing.image_url);
        let available_seats = dto.available_seats.unwrap_or(existing.available_seats);
        let price = dto.price.unwrap_or(existing.price);

        let class = sqlx::query_as::<_, Class>(&format!(
            r#"UPDATE classes
               SET name = $1, image_url = $2, available_seats = $3, price = $4
               WHERE id = $5
               RETURNING {CLASS_COLUMNS}"#,
        ))
        .bind(&name)
        .bind(&image_url)
        .bind(available_seats)
        .bind(price)
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: ClassStatus,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET status = $2 WHERE id = $1 RETURNING {CLASS_COLUMNS}",
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class with id {} not found", id)))?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn set_feedback(db: &PgPool, id: Uuid, feedback: &str) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET feedback = $2 WHERE id = $1 RETURNING {CLASS_COLUMNS}",
        ))
        .bind(id)
        .bind(feedback)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class with id {} not found", id)))?;

        Ok(class)
    }
}
