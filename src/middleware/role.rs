use async_trait::async_trait;
use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Capability interface for resolving a caller's role from their email.
///
/// Injected into the application state so the policy layer stays free of
/// database handles; tests substitute an in-memory implementation.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Returns the role recorded for `email`, or `None` when no account
    /// exists for it.
    async fn role_of(&self, email: &str) -> Result<Option<UserRole>, AppError>;
}

/// Production role store backed by the `users` table.
pub struct PgRoleStore {
    db: PgPool,
}

impl PgRoleStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn role_of(&self, email: &str) -> Result<Option<UserRole>, AppError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(role)
    }
}

/// Rejects with Forbidden unless the store reports exactly `expected`
/// for `email`. Role comparison is exact: an admin is not implicitly an
/// instructor.
pub async fn require_role(
    store: &dyn RoleStore,
    email: &str,
    expected: UserRole,
) -> Result<(), AppError> {
    match store.role_of(email).await? {
        Some(role) if role == expected => Ok(()),
        Some(role) => Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {}, but user has role: {}",
            expected,
            role
        ))),
        None => Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. No account found for caller"
        ))),
    }
}
