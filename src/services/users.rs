//! User directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, user_id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(user_id).await
    }

    /// List all users
    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        self.repository.users.list_all().await
    }

    /// Register a new user
    pub async fn create(&self, user: CreateUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self.repository.users.email_exists(&user.email, None).await? {
            return Err(AppError::NotUniqueEmail(user.email));
        }
        let created = self.repository.users.create(&user.name, &user.email).await?;
        tracing::info!("User {} created", created.id);
        Ok(created)
    }

    /// Partially update a user. Absent or blank fields are left unchanged;
    /// the email uniqueness probe only runs when the email actually changes.
    pub async fn update(&self, user_id: i64, patch: UpdateUser) -> AppResult<User> {
        let mut user = self.repository.users.get_by_id(user_id).await?;

        if let Some(name) = patch.name {
            if !name.trim().is_empty() {
                user.name = name;
            }
        }
        if let Some(email) = patch.email {
            if !email.trim().is_empty() {
                if email != user.email
                    && self
                        .repository
                        .users
                        .email_exists(&email, Some(user_id))
                        .await?
                {
                    return Err(AppError::NotUniqueEmail(email));
                }
                user.email = email;
            }
        }

        self.repository.users.update(&user).await?;
        tracing::info!("User {} updated", user.id);
        Ok(user)
    }

    /// Delete a user by ID
    pub async fn delete(&self, user_id: i64) -> AppResult<()> {
        self.repository.users.delete(user_id).await?;
        tracing::info!("User {} deleted", user_id);
        Ok(())
    }
}
