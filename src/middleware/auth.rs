use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and exposes the caller's
/// identity claims. Rejection happens before any route logic runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.sub
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
