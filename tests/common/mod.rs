use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use http_body_util::BodyExt;
use tempfile::TempDir;
use uuid::Uuid;

use campus_api::config::cors::CorsConfig;
use campus_api::config::jwt::JwtConfig;
use campus_api::modules::users::model::{User, UserRole};
use campus_api::router::init_router;
use campus_api::state::AppState;
use campus_api::store::{JsonStore, StoreError};
use campus_api::utils::jwt::create_token;
use campus_api::utils::password::hash_password;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    // Keeps the per-test data directory alive until the test ends.
    _data_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let store = JsonStore::open(data_dir.path()).await.unwrap();

    let state = AppState {
        store,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };

    TestApp {
        app: init_router(state.clone()),
        state,
        _data_dir: data_dir,
    }
}

/// Insert a user directly into the store and return it.
pub async fn create_test_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> User {
    let user = User {
        id: format!("user-{}", Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).unwrap(),
        role,
        department: "Computer Science".to_string(),
        created_at: Utc::now(),
    };

    let stored = user.clone();
    state
        .store
        .users
        .update(move |users| {
            users.push(stored);
            Ok::<_, StoreError>(())
        })
        .await
        .unwrap();

    user
}

/// A valid session token for the given user.
pub fn token_for(state: &AppState, user: &User) -> String {
    create_token(user, &state.jwt_config).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Build a request, optionally authenticated and with a JSON body.
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
