use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::stripe::StripeConfig;
use crate::middleware::role::{PgRoleStore, RoleStore};
use crate::modules::payments::gateway::{PaymentGateway, StripeGateway};

/// Shared application state. Cheap to clone; the capability objects
/// (`roles`, `gateway`) are trait objects so tests can substitute
/// in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub stripe_config: StripeConfig,
    pub cors_config: CorsConfig,
    pub roles: Arc<dyn RoleStore>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let stripe_config = StripeConfig::from_env();

    AppState {
        roles: Arc::new(PgRoleStore::new(db.clone())),
        gateway: Arc::new(StripeGateway::new(stripe_config.clone())),
        db,
        jwt_config: JwtConfig::from_env(),
        stripe_config,
        cors_config: CorsConfig::from_env(),
    }
}
