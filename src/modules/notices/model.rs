use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticePriority {
    Low,
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeAudience {
    All,
    Students,
    Faculty,
}

/// A posted notice. The list is kept newest-first; new notices are
/// inserted at the head.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub priority: NoticePriority,
    pub target_audience: NoticeAudience,
    pub posted_by: String,
    pub posted_by_name: String,
    pub posted_by_role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub priority: Option<NoticePriority>,
    pub target_audience: Option<NoticeAudience>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateNoticeResponse {
    pub message: String,
    pub notice: Notice,
}
