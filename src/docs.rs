use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::{
    Assignment, CreateAssignmentRequest, CreateAssignmentResponse, SubmitAssignmentRequest,
    Submission,
};
use crate::modules::attendance::model::{
    AttendanceEntry, AttendanceRecord, AttendanceReportRow, AttendanceStatus,
    MarkAttendanceRequest, MarkAttendanceResponse,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
};
use crate::modules::notices::model::{
    CreateNoticeRequest, CreateNoticeResponse, Notice, NoticeAudience, NoticePriority,
};
use crate::modules::users::model::{StudentSummary, UserResponse, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::register_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_students,
        crate::modules::users::controller::delete_user,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::attendance::controller::get_attendance,
        crate::modules::attendance::controller::attendance_report,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::submit_assignment,
        crate::modules::notices::controller::create_notice,
        crate::modules::notices::controller::get_notices,
        crate::modules::notices::controller::delete_notice,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            StudentSummary,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            RegisterResponse,
            MessageResponse,
            ErrorResponse,
            AttendanceStatus,
            AttendanceRecord,
            AttendanceEntry,
            MarkAttendanceRequest,
            MarkAttendanceResponse,
            AttendanceReportRow,
            Assignment,
            Submission,
            CreateAssignmentRequest,
            CreateAssignmentResponse,
            SubmitAssignmentRequest,
            Notice,
            NoticePriority,
            NoticeAudience,
            CreateNoticeRequest,
            CreateNoticeResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and admin-managed registration"),
        (name = "Users", description = "User management endpoints"),
        (name = "Attendance", description = "Attendance marking, listing and reporting"),
        (name = "Assignments", description = "Assignment management and submissions"),
        (name = "Notices", description = "Campus notice board")
    ),
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "Role-based campus management REST API with JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
