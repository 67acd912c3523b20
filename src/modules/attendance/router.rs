use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{attendance_report, get_attendance, mark_attendance};

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(mark_attendance).get(get_attendance))
        .route("/report", get(attendance_report))
}
