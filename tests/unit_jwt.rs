use chrono::Utc;
use uuid::Uuid;

use campus_api::config::jwt::JwtConfig;
use campus_api::modules::users::model::{User, UserRole};
use campus_api::utils::jwt::{create_token, verify_token};

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "unit-test-secret".to_string(),
        token_expiry: 86400,
    }
}

fn test_user(role: UserRole) -> User {
    User {
        id: format!("user-{}", Uuid::new_v4()),
        name: "Test User".to_string(),
        email: "test@campus.edu".to_string(),
        password_hash: "$2b$12$irrelevant".to_string(),
        role,
        department: "Computer Science".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn token_round_trips_identity_claims() {
    let config = test_config();
    let user = test_user(UserRole::Faculty);

    let token = create_token(&user, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.name, user.name);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, UserRole::Faculty);
    assert_eq!(claims.department, user.department);
}

#[test]
fn token_expires_24_hours_from_issuance() {
    let config = test_config();
    let user = test_user(UserRole::Student);

    let token = create_token(&user, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.exp - claims.iat, 86400);
}

#[test]
fn token_with_wrong_secret_is_rejected() {
    let config = test_config();
    let other = JwtConfig {
        secret: "a-different-secret".to_string(),
        token_expiry: 86400,
    };
    let user = test_user(UserRole::Admin);

    let token = create_token(&user, &config).unwrap();

    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn expired_token_is_rejected() {
    // Issue a token that expired beyond the default validation leeway.
    let config = JwtConfig {
        secret: "unit-test-secret".to_string(),
        token_expiry: -120,
    };
    let user = test_user(UserRole::Student);

    let token = create_token(&user, &config).unwrap();

    assert!(verify_token(&token, &config).is_err());
}

#[test]
fn garbage_token_is_rejected() {
    let config = test_config();

    assert!(verify_token("not.a.token", &config).is_err());
    assert!(verify_token("", &config).is_err());
}
