//! Role checks for authenticated handlers.
//!
//! Roles are exact allowed sets, not a hierarchy: marking attendance is
//! faculty-only and submitting is student-only, so an admin passing a
//! "lower" role check is never implied.

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Fail with 403 unless the caller's role is in the allowed set.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.0.role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.0.role
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn auth_user(role: UserRole) -> AuthUser {
        AuthUser(Claims {
            sub: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "test@campus.edu".to_string(),
            role,
            department: "Computer Science".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn allows_member_of_the_set() {
        let faculty = auth_user(UserRole::Faculty);
        assert!(check_any_role(&faculty, &[UserRole::Faculty]).is_ok());
        assert!(check_any_role(&faculty, &[UserRole::Admin, UserRole::Faculty]).is_ok());
    }

    #[test]
    fn rejects_role_outside_the_set() {
        let admin = auth_user(UserRole::Admin);
        let err = check_any_role(&admin, &[UserRole::Faculty]).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn no_hierarchy_shortcut_for_admins() {
        let admin = auth_user(UserRole::Admin);
        assert!(check_any_role(&admin, &[UserRole::Student]).is_err());
    }
}
