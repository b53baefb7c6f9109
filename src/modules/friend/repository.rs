use crate::api::error;
use crate::modules::friend::model::EdgeState;
use crate::modules::user::schema::UserEntity;

#[async_trait::async_trait]
pub trait FriendRepository {
    /// Writes both directions of the edge atomically. Fails with `NotFound` if either user is
    /// missing and returns the edge state seen before the write.
    async fn create_friendship(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<EdgeState, error::SystemError>;

    /// Removes whichever directions exist and returns the edge state seen before the removal.
    async fn delete_friendship(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<EdgeState, error::SystemError>;

    async fn find_friends(&self, user_id: u64) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn find_common_friends(
        &self,
        user_id: u64,
        other_user_id: u64,
    ) -> Result<Vec<UserEntity>, error::SystemError>;
}
