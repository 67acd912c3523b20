use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{create_assignment, get_assignments, submit_assignment};

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).get(get_assignments))
        .route("/{id}/submit", put(submit_assignment))
}
