use anyhow::anyhow;
use tracing::instrument;

use crate::modules::users::model::{StudentSummary, UserResponse, UserRole};
use crate::store::JsonStore;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn list_users(store: &JsonStore) -> Result<Vec<UserResponse>, AppError> {
        let users = store.users.read().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(store))]
    pub async fn list_students(store: &JsonStore) -> Result<Vec<StudentSummary>, AppError> {
        let users = store.users.read().await?;
        Ok(users
            .iter()
            .filter(|u| u.role == UserRole::Student)
            .map(StudentSummary::from)
            .collect())
    }

    /// Delete a user by id. Admin accounts are never deletable through
    /// this path.
    #[instrument(skip(store))]
    pub async fn delete_user(store: &JsonStore, id: &str) -> Result<(), AppError> {
        store
            .users
            .update(|users| {
                let idx = users
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

                if users[idx].role == UserRole::Admin {
                    return Err(AppError::bad_request(anyhow!("Cannot delete admin user")));
                }

                users.remove(idx);
                Ok(())
            })
            .await
    }
}
