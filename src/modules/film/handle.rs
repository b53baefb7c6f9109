use actix_web::{delete, get, post, put, web};

use crate::{
    api::{error, success},
    constants::DEFAULT_POPULAR_COUNT,
    modules::{
        film::{model, repository_mem::FilmRepositoryMem, service::FilmService},
        user::repository_mem::UserRepositoryMem,
    },
    utils::{ValidatedJson, ValidatedQuery},
};

pub type FilmSvc = FilmService<FilmRepositoryMem, UserRepositoryMem>;

#[get("")]
pub async fn list_films(
    film_service: web::Data<FilmSvc>,
) -> Result<success::Success<Vec<model::FilmResponse>>, error::Error> {
    let films = film_service.get_all().await?;
    Ok(success::Success::ok(films, "Films retrieved successfully"))
}

#[get("/{id:\\d+}")]
pub async fn get_film(
    film_service: web::Data<FilmSvc>,
    film_id: web::Path<u64>,
) -> Result<success::Success<model::FilmResponse>, error::Error> {
    let film = film_service.get_by_id(film_id.into_inner()).await?;
    Ok(success::Success::ok(film, "Film retrieved successfully"))
}

#[post("")]
pub async fn create_film(
    film_service: web::Data<FilmSvc>,
    film_data: ValidatedJson<model::CreateFilmModel>,
) -> Result<success::Success<model::FilmResponse>, error::Error> {
    let film = film_service.create(film_data.0).await?;
    Ok(success::Success::created(film, "Film created successfully"))
}

#[put("")]
pub async fn update_film(
    film_service: web::Data<FilmSvc>,
    film_data: ValidatedJson<model::UpdateFilmModel>,
) -> Result<success::Success<model::FilmResponse>, error::Error> {
    let film = film_service.update(film_data.0).await?;
    Ok(success::Success::ok(film, "Film updated successfully"))
}

#[put("/{id:\\d+}/like/{user_id:\\d+}")]
pub async fn like_film(
    film_service: web::Data<FilmSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<model::FilmResponse>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    let film = film_service.like_film(film_id, user_id).await?;
    Ok(success::Success::ok(film, "Like added successfully"))
}

#[delete("/{id:\\d+}/like/{user_id:\\d+}")]
pub async fn unlike_film(
    film_service: web::Data<FilmSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<model::FilmResponse>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    let film = film_service.unlike_film(film_id, user_id).await?;
    Ok(success::Success::ok(film, "Like removed successfully"))
}

#[get("/popular")]
pub async fn popular_films(
    film_service: web::Data<FilmSvc>,
    query: ValidatedQuery<model::PopularQuery>,
) -> Result<success::Success<Vec<model::FilmResponse>>, error::Error> {
    let count = query.0.count.unwrap_or(DEFAULT_POPULAR_COUNT);
    let films = film_service.get_popular(count).await?;
    Ok(success::Success::ok(films, "Popular films retrieved successfully"))
}
