use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::users::model::{StudentSummary, UserResponse, UserRole};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List all users, password hashes excluded (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    let users = UserService::list_users(&state.store).await?;
    Ok(Json(users))
}

/// List students (admin and faculty)
#[utoipa::path(
    get,
    path = "/api/users/students",
    responses(
        (status = 200, description = "All students", body = Vec<StudentSummary>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin or faculty only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<StudentSummary>>, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin, UserRole::Faculty])?;

    let students = UserService::list_students(&state.store).await?;
    Ok(Json(students))
}

/// Delete a user (admin only; admin accounts cannot be deleted)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Target is an admin account", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    UserService::delete_user(&state.store, &id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
