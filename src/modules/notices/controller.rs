use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateNoticeRequest, CreateNoticeResponse, Notice};
use super::service::NoticeService;

/// Post a notice (admin and faculty)
#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = CreateNoticeRequest,
    responses(
        (status = 201, description = "Notice posted", body = CreateNoticeResponse),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin or faculty only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
#[instrument(skip(state, dto))]
pub async fn create_notice(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<CreateNoticeResponse>), AppError> {
    check_any_role(&auth_user, &[UserRole::Admin, UserRole::Faculty])?;

    let notice = NoticeService::create(&state.store, &auth_user.0, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateNoticeResponse {
            message: "Notice posted".to_string(),
            notice,
        }),
    ))
}

/// List notices targeted at the caller's role
#[utoipa::path(
    get,
    path = "/api/notices",
    responses(
        (status = 200, description = "Visible notices, newest first", body = Vec<Notice>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
#[instrument(skip(state))]
pub async fn get_notices(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Notice>>, AppError> {
    let notices = NoticeService::list(&state.store, &auth_user.0).await?;
    Ok(Json(notices))
}

/// Delete a notice (admin only)
#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    params(("id" = String, Path, description = "Notice id")),
    responses(
        (status = 200, description = "Notice deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Notice not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notices"
)]
#[instrument(skip(state))]
pub async fn delete_notice(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    NoticeService::delete(&state.store, &id).await?;
    Ok(Json(MessageResponse {
        message: "Notice deleted successfully".to_string(),
    }))
}
