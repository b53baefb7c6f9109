use log::{info, warn};
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::model::{
    CreateUserModel, InsertUser, UpdateUser, UpdateUserModel, UserResponse,
};
use crate::modules::user::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

/// Falls back to the login when no usable display name was given.
fn display_name(name: Option<String>, login: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => login.to_string(),
    }
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, error::SystemError> {
        let users = self.repo.find_all().await?;
        info!("Listing all users, count: {}", users.len());
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: u64) -> Result<UserResponse, error::SystemError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| error::SystemError::not_found(format!("User {id} not found")))
    }

    pub async fn create(&self, user: CreateUserModel) -> Result<UserResponse, error::SystemError> {
        let new_user = InsertUser {
            name: display_name(user.name, &user.login),
            email: user.email,
            login: user.login,
            birthday: user.birthday,
        };

        let entity = self.repo.create(&new_user).await?;
        info!("User created, id: {}, login: {}", entity.id, entity.login);
        Ok(UserResponse::from(entity))
    }

    pub async fn update(&self, user: UpdateUserModel) -> Result<UserResponse, error::SystemError> {
        let Some(id) = user.id else {
            warn!("Attempt to update a user without an id");
            return Err(error::SystemError::bad_request("User id must be provided"));
        };

        let update_user = UpdateUser {
            name: display_name(user.name, &user.login),
            email: user.email,
            login: user.login,
            birthday: user.birthday,
        };

        let entity = self.repo.update(id, &update_user).await.inspect_err(|e| {
            warn!("Failed to update user {id}: {e}");
        })?;
        info!("User updated, id: {}, name: {}", entity.id, entity.name);
        Ok(UserResponse::from(entity))
    }
}
