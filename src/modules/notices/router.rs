use axum::{
    Router,
    routing::{delete, post},
};

use crate::state::AppState;

use super::controller::{create_notice, delete_notice, get_notices};

pub fn init_notices_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_notice).get(get_notices))
        .route("/{id}", delete(delete_notice))
}
