use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::{
    api::error,
    constants::MIN_RELEASE_DATE,
    modules::{
        film::{
            model::{CreateFilmModel, FilmResponse, InsertFilm, UpdateFilm, UpdateFilmModel},
            ranking::top_liked,
            repository::FilmRepository,
        },
        user::repository::UserRepository,
    },
};

/// Invariants every stored film keeps, whatever the caller checked before.
fn check_film(release_date: NaiveDate, duration: i64) -> Result<(), error::SystemError> {
    if release_date < MIN_RELEASE_DATE {
        return Err(error::SystemError::bad_request(format!(
            "Release date cannot be earlier than {MIN_RELEASE_DATE}"
        )));
    }
    if duration < 1 {
        return Err(error::SystemError::bad_request("Duration must be positive"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct FilmService<F, U>
where
    F: FilmRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    film_repo: Arc<F>,
    user_repo: Arc<U>,
}

impl<F, U> FilmService<F, U>
where
    F: FilmRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(film_repo: Arc<F>, user_repo: Arc<U>) -> Self {
        info!("FilmService initialized with dependencies");
        FilmService { film_repo, user_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<FilmResponse>, error::SystemError> {
        let films = self.film_repo.find_all().await?;
        info!("Listing all films, count: {}", films.len());
        Ok(films.into_iter().map(FilmResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: u64) -> Result<FilmResponse, error::SystemError> {
        self.film_repo
            .find_by_id(id)
            .await?
            .map(FilmResponse::from)
            .ok_or_else(|| error::SystemError::not_found(format!("Film {id} not found")))
    }

    pub async fn create(&self, film: CreateFilmModel) -> Result<FilmResponse, error::SystemError> {
        check_film(film.release_date, film.duration).inspect_err(|e| {
            warn!("Rejected film {:?}: {e}", film.name);
        })?;

        let new_film = InsertFilm {
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
        };

        let entity = self.film_repo.create(&new_film).await?;
        info!("Film created, id: {}, name: {}", entity.id, entity.name);
        Ok(FilmResponse::from(entity))
    }

    pub async fn update(&self, film: UpdateFilmModel) -> Result<FilmResponse, error::SystemError> {
        let Some(id) = film.id else {
            warn!("Attempt to update a film without an id");
            return Err(error::SystemError::bad_request("Film id must be provided"));
        };
        check_film(film.release_date, film.duration).inspect_err(|e| {
            warn!("Rejected update of film {id}: {e}");
        })?;

        let update_film = UpdateFilm {
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
        };

        let entity = self.film_repo.update(id, &update_film).await.inspect_err(|e| {
            warn!("Failed to update film {id}: {e}");
        })?;
        info!("Film updated, id: {}, name: {}", entity.id, entity.name);
        Ok(FilmResponse::from(entity))
    }

    async fn ensure_user(&self, user_id: u64) -> Result<(), error::SystemError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(error::SystemError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    pub async fn like_film(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<FilmResponse, error::SystemError> {
        debug!("User {user_id} likes film {film_id}");
        self.ensure_user(user_id).await?;

        let (film, changed) = self.film_repo.add_like(film_id, user_id).await?;
        if changed {
            info!(
                "Like added, film: {film_id}, user: {user_id}, likes now: {}",
                film.likes.len()
            );
        } else {
            info!("User {user_id} already likes film {film_id}");
        }
        Ok(FilmResponse::from(film))
    }

    pub async fn unlike_film(
        &self,
        film_id: u64,
        user_id: u64,
    ) -> Result<FilmResponse, error::SystemError> {
        debug!("User {user_id} unlikes film {film_id}");
        self.ensure_user(user_id).await?;

        let (film, changed) = self.film_repo.remove_like(film_id, user_id).await?;
        if changed {
            info!(
                "Like removed, film: {film_id}, user: {user_id}, likes left: {}",
                film.likes.len()
            );
        } else {
            info!("User {user_id} did not like film {film_id}");
        }
        Ok(FilmResponse::from(film))
    }

    pub async fn get_popular(&self, count: i64) -> Result<Vec<FilmResponse>, error::SystemError> {
        if count < 0 {
            return Err(error::SystemError::bad_request("Count cannot be negative"));
        }
        debug!("Top {count} most liked films requested");

        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        let films = top_liked(self.film_repo.find_all().await?, limit);

        info!("Returning {} of the top {count} most liked films", films.len());
        Ok(films.into_iter().map(FilmResponse::from).collect())
    }
}
