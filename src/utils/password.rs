use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

/// Whether a stored credential already looks like a bcrypt hash.
/// Used by demo-account seeding to hash legacy plaintext values in place.
pub fn is_bcrypt_hash(value: &str) -> bool {
    value.starts_with("$2")
}
