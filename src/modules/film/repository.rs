use crate::{
    api::error,
    modules::film::{
        model::{InsertFilm, UpdateFilm},
        schema::FilmEntity,
    },
};

#[async_trait::async_trait]
pub trait FilmRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<FilmEntity>, error::SystemError>;

    /// All films in ascending id order, which is also creation order.
    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError>;
    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError>;

    /// Replaces the descriptive fields. The like-set is left untouched.
    async fn update(&self, id: u64, film: &UpdateFilm) -> Result<FilmEntity, error::SystemError>;

    /// Returns the film after the call and whether the like-set changed.
    async fn add_like(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<(FilmEntity, bool), error::SystemError>;
    async fn remove_like(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<(FilmEntity, bool), error::SystemError>;
}
