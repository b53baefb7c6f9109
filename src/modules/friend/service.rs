use log::{debug, info, warn};
use std::sync::Arc;

use crate::{
    api::error,
    modules::{friend::repository::FriendRepository, user::model::UserResponse},
};

#[derive(Clone)]
pub struct FriendService<R>
where
    R: FriendRepository + Send + Sync,
{
    friend_repo: Arc<R>,
}

impl<R> FriendService<R>
where
    R: FriendRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { friend_repo }
    }

    pub async fn add_friend(&self, user_id: u64, friend_id: u64) -> Result<(), error::SystemError> {
        let before = self.friend_repo.create_friendship(user_id, friend_id).await?;
        if before.is_mutual() {
            info!("Users {user_id} and {friend_id} are already friends");
        } else if before.is_asymmetric() {
            warn!(
                "Repaired one-sided friendship, user {user_id}: {}, user {friend_id}: {}",
                before.user_has_friend, before.friend_has_user
            );
        } else {
            info!("Users {user_id} and {friend_id} are now friends");
        }
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<(), error::SystemError> {
        let before = self.friend_repo.delete_friendship(user_id, friend_id).await?;
        if before.is_absent() {
            info!("Users {user_id} and {friend_id} were not friends");
            return Ok(());
        }
        if before.is_asymmetric() {
            warn!(
                "Friendship was not mutual, user {user_id}: {}, user {friend_id}: {}",
                before.user_has_friend, before.friend_has_user
            );
        }
        info!("Friendship between users {user_id} and {friend_id} removed");
        Ok(())
    }

    pub async fn get_friends(&self, user_id: u64) -> Result<Vec<UserResponse>, error::SystemError> {
        let friends = self.friend_repo.find_friends(user_id).await?;
        debug!("User {user_id} has {} friend(s)", friends.len());
        Ok(friends.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_common_friends(
        &self,
        user_id: u64,
        other_user_id: u64,
    ) -> Result<Vec<UserResponse>, error::SystemError> {
        let common = self.friend_repo.find_common_friends(user_id, other_user_id).await?;
        debug!(
            "Found {} common friend(s) for users {user_id} and {other_user_id}",
            common.len()
        );
        Ok(common.into_iter().map(UserResponse::from).collect())
    }
}
