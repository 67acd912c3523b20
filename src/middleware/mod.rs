//! Request middleware and extractors.
//!
//! - [`auth`]: bearer-token validation via the [`auth::AuthUser`] extractor
//! - [`role`]: allowed-role-set checks applied inside handlers

pub mod auth;
pub mod role;
