use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::film::{
        model::{InsertFilm, UpdateFilm},
        repository::FilmRepository,
        schema::FilmEntity,
    },
};

#[derive(Debug, Default)]
struct FilmTable {
    rows: BTreeMap<u64, FilmEntity>,
    last_id: u64,
}

impl FilmTable {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn row_mut(&mut self, id: u64) -> Result<&mut FilmEntity, error::SystemError> {
        self.rows
            .get_mut(&id)
            .ok_or_else(|| error::SystemError::not_found(format!("Film {id} not found")))
    }
}

/// In-memory film store; one writer at a time across the whole collection.
#[derive(Clone, Default)]
pub struct FilmRepositoryMem {
    table: Arc<RwLock<FilmTable>>,
}

impl FilmRepositoryMem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FilmRepository for FilmRepositoryMem {
    async fn find_by_id(&self, id: u64) -> Result<Option<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let entity = FilmEntity {
            id,
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            likes: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: u64, film: &UpdateFilm) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let entity = table.row_mut(id)?;

        entity.name = film.name.clone();
        entity.description = film.description.clone();
        entity.release_date = film.release_date;
        entity.duration = film.duration;

        Ok(entity.clone())
    }

    async fn add_like(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<(FilmEntity, bool), error::SystemError> {
        let mut table = self.table.write().await;
        let entity = table.row_mut(film_id)?;
        let changed = entity.likes.insert(user_id);
        Ok((entity.clone(), changed))
    }

    async fn remove_like(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<(FilmEntity, bool), error::SystemError> {
        let mut table = self.table.write().await;
        let entity = table.row_mut(film_id)?;
        let changed = entity.likes.remove(&user_id);
        Ok((entity.clone(), changed))
    }
}
