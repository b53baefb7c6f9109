use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::user::{
        model::{InsertUser, UpdateUser},
        repository::UserRepository,
        schema::UserEntity,
    },
};

/// Users keyed by id plus the last id handed out. Ids come from the counter, never from a scan, so
/// they are never reused.
#[derive(Debug, Default)]
pub struct UserTable {
    pub(crate) rows: BTreeMap<u64, UserEntity>,
    last_id: u64,
}

impl UserTable {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory user store. Clones share the same table; every mutation of the user collection
/// (including both sides of a friendship) happens under its write lock.
#[derive(Clone, Default)]
pub struct UserRepositoryMem {
    table: Arc<RwLock<UserTable>>,
}

impl UserRepositoryMem {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn table(&self) -> &RwLock<UserTable> {
        &self.table
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMem {
    async fn find_by_id(&self, id: u64) -> Result<Option<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let entity = UserEntity {
            id,
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
            friends: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: u64, user: &UpdateUser) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let entity = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| error::SystemError::not_found(format!("User {id} not found")))?;

        entity.email = user.email.clone();
        entity.login = user.login.clone();
        entity.name = user.name.clone();
        entity.birthday = user.birthday;

        Ok(entity.clone())
    }
}
