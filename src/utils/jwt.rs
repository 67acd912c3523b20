use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Issue a signed token embedding the user's identity claims.
pub fn create_token(user: &User, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.token_expiry) as usize;
    let now = now as usize;

    let claims = Claims {
        sub: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        department: user.department.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
