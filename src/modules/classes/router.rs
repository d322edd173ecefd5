use axum::{
    Router,
    routing::{get, patch},
};

use crate::modules::classes::controller::{
    create_class, get_approved_classes, get_class, get_classes, get_my_classes,
    set_class_feedback, set_class_status, update_class,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes).post(create_class))
        .route("/approved", get(get_approved_classes))
        .route("/mine", get(get_my_classes))
        .route("/{id}", get(get_class).patch(update_class))
        .route("/{id}/status", patch(set_class_status))
        .route("/{id}/feedback", patch(set_class_feedback))
}
