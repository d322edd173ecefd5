use sqlx::PgPool;

use crate::modules::users::model::UserRole;

/// Bootstrap path for the first admin: registration only ever creates
/// students, and promotion routes require an existing admin.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    email: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    sqlx::query(
        "INSERT INTO users (name, email, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role",
    )
    .bind(name)
    .bind(email)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    Ok(())
}
