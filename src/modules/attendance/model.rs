use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One student's attendance row, created in bulk by a faculty marking
/// action and never individually mutated afterwards.
///
/// `student_name` is a denormalized snapshot taken at marking time; it
/// stays stable even if the student is later renamed or removed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub course: String,
    /// Calendar day, e.g. `2024-01-10`. Kept as an opaque string so the
    /// report's year-month filter stays a plain prefix match.
    pub date: String,
    pub student_id: String,
    pub student_name: String,
    pub status: AttendanceStatus,
    pub marked_by: String,
    pub marked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: String,
    pub student_name: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    #[validate(length(min = 1))]
    pub course: String,
    #[validate(length(min = 1))]
    pub date: String,
    pub records: Vec<AttendanceEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAttendanceResponse {
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub course: Option<String>,
    pub date: Option<String>,
    pub student_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportQuery {
    pub course: Option<String>,
    /// Year-month prefix, e.g. `2024-01`.
    pub month: Option<String>,
}

/// Per-student aggregate over the filtered attendance window.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportRow {
    pub student_id: String,
    pub student_name: String,
    pub total: u32,
    pub present: u32,
    pub percentage: u32,
}
