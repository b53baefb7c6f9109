use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::MAX_DESCRIPTION_LENGTH;
use crate::modules::film::schema::FilmEntity;
use crate::utils::{validate_not_blank, validate_release_date};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmModel {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Description cannot be longer than 200 characters"
    ))]
    pub description: String,
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: NaiveDate,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i64,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmModel {
    pub id: Option<u64>,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        max = MAX_DESCRIPTION_LENGTH,
        message = "Description cannot be longer than 200 characters"
    ))]
    pub description: String,
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: NaiveDate,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i64,
}

#[derive(Deserialize, Validate)]
pub struct PopularQuery {
    #[validate(range(min = 0, message = "Count cannot be negative"))]
    pub count: Option<i64>,
}

pub struct InsertFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}

pub struct UpdateFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub likes: Vec<u64>,
}

impl From<FilmEntity> for FilmResponse {
    fn from(entity: FilmEntity) -> Self {
        FilmResponse {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            release_date: entity.release_date,
            duration: entity.duration,
            likes: entity.likes.into_iter().collect(),
        }
    }
}
