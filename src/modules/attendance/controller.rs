use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    AttendanceQuery, AttendanceRecord, AttendanceReportRow, MarkAttendanceRequest,
    MarkAttendanceResponse, ReportQuery,
};
use super::service::AttendanceService;

/// Mark attendance for a course and date (faculty only)
///
/// Re-marking the same course and date replaces the previous record set.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 201, description = "Attendance marked", body = MarkAttendanceResponse),
        (status = 400, description = "Missing course, date or records", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Faculty only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state, dto))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MarkAttendanceRequest>,
) -> Result<(StatusCode, Json<MarkAttendanceResponse>), AppError> {
    check_any_role(&auth_user, &[UserRole::Faculty])?;

    let count = AttendanceService::mark(&state.store, &auth_user.0, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MarkAttendanceResponse {
            message: "Attendance marked successfully".to_string(),
            count,
        }),
    ))
}

/// List attendance records visible to the caller
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceRecord>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state, query))]
pub async fn get_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = AttendanceService::list(&state.store, &auth_user.0, query).await?;
    Ok(Json(records))
}

/// Per-student attendance percentages (faculty and admin)
#[utoipa::path(
    get,
    path = "/api/attendance/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Aggregated report", body = Vec<AttendanceReportRow>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Faculty or admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state, query))]
pub async fn attendance_report(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<AttendanceReportRow>>, AppError> {
    check_any_role(&auth_user, &[UserRole::Faculty, UserRole::Admin])?;

    let report = AttendanceService::report(&state.store, query).await?;
    Ok(Json(report))
}
