use axum::Json;
use axum::extract::{Path, Query, State};
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

use super::model::{
    Assignment, AssignmentQuery, CreateAssignmentRequest, CreateAssignmentResponse,
    SubmitAssignmentRequest,
};
use super::service::AssignmentService;

/// Create an assignment (faculty only)
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = CreateAssignmentResponse),
        (status = 400, description = "Missing title, course or due date", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Faculty only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<CreateAssignmentResponse>), AppError> {
    check_any_role(&auth_user, &[UserRole::Faculty])?;

    let assignment = AssignmentService::create(&state.store, &auth_user.0, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAssignmentResponse {
            message: "Assignment created".to_string(),
            assignment,
        }),
    ))
}

/// List assignments; student callers only see their own submissions
#[utoipa::path(
    get,
    path = "/api/assignments",
    params(AssignmentQuery),
    responses(
        (status = 200, description = "Assignments", body = Vec<Assignment>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, query))]
pub async fn get_assignments(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<AssignmentQuery>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = AssignmentService::list(&state.store, &auth_user.0, query).await?;
    Ok(Json(assignments))
}

/// Submit or resubmit an assignment (student only)
#[utoipa::path(
    put,
    path = "/api/assignments/{id}/submit",
    params(("id" = String, Path, description = "Assignment id")),
    request_body = SubmitAssignmentRequest,
    responses(
        (status = 200, description = "Submission stored", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Student only", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, dto))]
pub async fn submit_assignment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<SubmitAssignmentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Student])?;

    AssignmentService::submit(&state.store, &auth_user.0, &id, dto).await?;
    Ok(Json(MessageResponse {
        message: "Assignment submitted successfully".to_string(),
    }))
}
