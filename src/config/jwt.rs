use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Tokens carry no refresh mechanism;
    /// expiry forces a re-login.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
