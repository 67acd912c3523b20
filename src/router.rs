use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::assignments::router::init_assignments_router;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::notices::router::init_notices_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/users", init_users_router())
                .nest("/attendance", init_attendance_router())
                .nest("/assignments", init_assignments_router())
                .nest("/notices", init_notices_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}
