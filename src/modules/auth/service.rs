use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserResponse, UserRole};
use crate::store::JsonStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, is_bcrypt_hash, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest};

struct DemoAccount {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: UserRole,
    department: &'static str,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: "admin-001",
        name: "Admin",
        email: "admin@campus.edu",
        password: "admin123",
        role: UserRole::Admin,
        department: "Administration",
    },
    DemoAccount {
        id: "faculty-001",
        name: "Default Faculty",
        email: "faculty@campus.edu",
        password: "faculty123",
        role: UserRole::Faculty,
        department: "Computer Science",
    },
    DemoAccount {
        id: "student-001",
        name: "Default Student",
        email: "student@campus.edu",
        password: "student123",
        role: UserRole::Student,
        department: "Computer Science",
    },
];

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, dto, jwt_config))]
    pub async fn login(
        store: &JsonStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let users = store.users.read().await?;
        let email = dto.email.to_lowercase();

        let user = users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(&email))
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid email or password")))?;

        // A malformed stored hash counts as a failed comparison, not a 500.
        let valid = verify_password(&dto.password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(AppError::unauthorized(anyhow!("Invalid email or password")));
        }

        let token = create_token(user, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    #[instrument(skip(store, dto))]
    pub async fn register(store: &JsonStore, dto: RegisterRequest) -> Result<UserResponse, AppError> {
        let hashed = hash_password(&dto.password)?;
        let email = dto.email.to_lowercase();

        store
            .users
            .update(move |users| {
                if users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
                    return Err(AppError::bad_request(anyhow!(
                        "User with this email already exists"
                    )));
                }

                let user = User {
                    id: format!("user-{}", Uuid::new_v4()),
                    name: dto.name,
                    email,
                    password_hash: hashed,
                    role: dto.role,
                    department: dto.department.unwrap_or_default(),
                    created_at: Utc::now(),
                };

                let response = UserResponse::from(&user);
                users.push(user);
                Ok(response)
            })
            .await
    }

    /// Seed the demo accounts and heal their stored credentials.
    ///
    /// Idempotent, run once at process start: inserts a missing demo
    /// account, hashes a legacy plaintext password in place, and re-hashes
    /// a demo hash that no longer validates against the known demo
    /// password. Accounts outside [`DEMO_ACCOUNTS`] are never touched.
    /// Returns the number of records changed.
    #[instrument(skip(store))]
    pub async fn seed_demo_users(store: &JsonStore) -> Result<usize, AppError> {
        store
            .users
            .update(|users| {
                let mut changed = 0;

                for demo in &DEMO_ACCOUNTS {
                    match users.iter_mut().find(|u| u.email == demo.email) {
                        None => {
                            users.push(User {
                                id: demo.id.to_string(),
                                name: demo.name.to_string(),
                                email: demo.email.to_string(),
                                password_hash: hash_password(demo.password)?,
                                role: demo.role,
                                department: demo.department.to_string(),
                                created_at: Utc::now(),
                            });
                            changed += 1;
                        }
                        Some(existing) => {
                            if !is_bcrypt_hash(&existing.password_hash) {
                                // Legacy plaintext value: hash it once in place.
                                let plain = if existing.password_hash.is_empty() {
                                    demo.password.to_string()
                                } else {
                                    existing.password_hash.clone()
                                };
                                existing.password_hash = hash_password(&plain)?;
                                changed += 1;
                            } else if !verify_password(demo.password, &existing.password_hash)
                                .unwrap_or(false)
                            {
                                // Keep demo credentials deterministic.
                                existing.password_hash = hash_password(demo.password)?;
                                changed += 1;
                            }
                        }
                    }
                }

                Ok::<_, AppError>(changed)
            })
            .await
    }
}
