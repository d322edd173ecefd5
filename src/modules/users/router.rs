use axum::{
    Router,
    routing::{get, patch},
};

use crate::modules::users::controller::{
    check_admin, check_instructor, get_users, promote_admin, promote_instructor, register_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(register_user))
        .route("/admin/{email}", get(check_admin))
        .route("/instructor/{email}", get(check_instructor))
        .route("/{id}/admin", patch(promote_admin))
        .route("/{id}/instructor", patch(promote_instructor))
}
