//! User entities and projections.
//!
//! [`User`] is the persisted shape (`users.json`) and is never serialized
//! into a response directly; everything leaving the API goes through
//! [`UserResponse`] or [`StudentSummary`], which strip the password hash.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Faculty,
    Student,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Faculty => write!(f, "faculty"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// A user account as persisted in `users.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercased; lookups are case-insensitive.
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

/// User projection with the password hash stripped.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            department: user.department.clone(),
            created_at: user.created_at,
        }
    }
}

/// Student projection handed to faculty when marking attendance.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl From<&User> for StudentSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }
    }
}
