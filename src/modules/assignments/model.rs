use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A student's submission, embedded in its assignment. At most one per
/// (assignment, student); resubmission overwrites in place.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub student_id: String,
    pub student_name: String,
    pub content: String,
    pub submitted_at: DateTime<Utc>,
}

/// An assignment, immutable after creation except for submission upserts.
///
/// `created_by_name` is a snapshot of the creator's name at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course: String,
    pub due_date: String,
    pub created_by: String,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub course: String,
    #[validate(length(min = 1))]
    pub due_date: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAssignmentResponse {
    pub message: String,
    pub assignment: Assignment,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitAssignmentRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AssignmentQuery {
    pub course: Option<String>,
}
