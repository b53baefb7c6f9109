use crate::{
    api::error,
    modules::user::{
        model::{InsertUser, UpdateUser},
        schema::UserEntity,
    },
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<UserEntity>, error::SystemError>;

    /// All users in ascending id order, which is also creation order.
    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;
    async fn update(&self, id: u64, user: &UpdateUser) -> Result<UserEntity, error::SystemError>;
}
