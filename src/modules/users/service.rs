use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{RegisterOutcome, RegisterUserDto, User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Registers a new user with the default `student` role. A duplicate
    /// email reports "user already exists" without inserting; the unique
    /// index on email backstops the pre-insert check under races.
    #[instrument(skip(db))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterUserDto,
    ) -> Result<RegisterOutcome, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Ok(RegisterOutcome::AlreadyRegistered {
                message: "user already exists".to_string(),
            });
        }

        let inserted = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, photo_url)
               VALUES ($1, $2, $3)
               RETURNING id, name, email, photo_url, role, created_at"#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo_url)
        .fetch_one(db)
        .await;

        match inserted {
            Ok(user) => Ok(RegisterOutcome::Created(user)),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(RegisterOutcome::AlreadyRegistered {
                    message: "user already exists".to_string(),
                })
            }
            Err(e) => Err(AppError::from(e)),
        }
    }

    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, photo_url, role, created_at FROM users",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Sets a user's role. Registration is the only way accounts come
    /// into existence; promotion only ever rewrites the role field.
    #[instrument(skip(db))]
    pub async fn promote(db: &PgPool, id: Uuid, role: UserRole) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users SET role = $2
               WHERE id = $1
               RETURNING id, name, email, photo_url, role, created_at"#,
        )
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;

        Ok(user)
    }
}
