use axum::{Router, routing::get};

use crate::modules::selections::controller::{
    create_selection, delete_selection, get_selection, get_selections, mark_selection_paid,
};
use crate::state::AppState;

pub fn init_selections_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_selections).post(create_selection))
        .route(
            "/{id}",
            get(get_selection)
                .delete(delete_selection)
                .patch(mark_selection_paid),
        )
}
