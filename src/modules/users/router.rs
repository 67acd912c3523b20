use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{delete_user, get_students, get_users};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/students", get(get_students))
        .route("/{id}", delete(delete_user))
}
