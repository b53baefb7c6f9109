use crate::{
    api::error,
    modules::{
        friend::{model::EdgeState, repository::FriendRepository},
        user::{
            repository_mem::{UserRepositoryMem, UserTable},
            schema::UserEntity,
        },
    },
};

fn user_not_found(id: u64) -> error::SystemError {
    error::SystemError::not_found(format!("User {id} not found"))
}

fn row(table: &UserTable, id: u64) -> Result<&UserEntity, error::SystemError> {
    table.rows.get(&id).ok_or_else(|| user_not_found(id))
}

fn row_mut(table: &mut UserTable, id: u64) -> Result<&mut UserEntity, error::SystemError> {
    table.rows.get_mut(&id).ok_or_else(|| user_not_found(id))
}

fn edge_state(
    table: &UserTable,
    user_id: u64,
    friend_id: u64,
) -> Result<EdgeState, error::SystemError> {
    Ok(EdgeState {
        user_has_friend: row(table, user_id)?.friends.contains(&friend_id),
        friend_has_user: row(table, friend_id)?.friends.contains(&user_id),
    })
}

/// Turns friend ids into user snapshots. A dangling id means the friendship graph is corrupt.
fn resolve<'a>(
    table: &UserTable,
    owner_id: u64,
    ids: impl IntoIterator<Item = &'a u64>,
) -> Result<Vec<UserEntity>, error::SystemError> {
    ids.into_iter()
        .map(|id| {
            table.rows.get(id).cloned().ok_or_else(|| {
                error::SystemError::inconsistent(format!(
                    "User {owner_id} lists friend {id} which does not exist"
                ))
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl FriendRepository for UserRepositoryMem {
    async fn create_friendship(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<EdgeState, error::SystemError> {
        let mut table = self.table().write().await;
        let before = edge_state(&table, user_id, friend_id)?;
        if user_id == friend_id {
            return Err(error::SystemError::bad_request("Cannot add yourself as a friend"));
        }

        row_mut(&mut table, user_id)?.friends.insert(friend_id);
        row_mut(&mut table, friend_id)?.friends.insert(user_id);

        Ok(before)
    }

    async fn delete_friendship(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<EdgeState, error::SystemError> {
        let mut table = self.table().write().await;
        let before = edge_state(&table, user_id, friend_id)?;

        row_mut(&mut table, user_id)?.friends.remove(&friend_id);
        row_mut(&mut table, friend_id)?.friends.remove(&user_id);

        Ok(before)
    }

    async fn find_friends(&self, user_id: u64) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table().read().await;
        let user = row(&table, user_id)?;
        resolve(&table, user_id, &user.friends)
    }

    async fn find_common_friends(
        &self,
        user_id: u64,
        other_user_id: u64,
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table().read().await;
        let user = row(&table, user_id)?;
        let other = row(&table, other_user_id)?;
        resolve(&table, user_id, user.friends.intersection(&other.friends))
    }
}
