use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::user::schema::UserEntity;
use crate::utils::{validate_birthday, validate_login};

#[derive(Deserialize, Validate)]
pub struct CreateUserModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "validate_login"))]
    pub login: String,
    pub name: Option<String>,
    #[validate(custom(function = "validate_birthday"))]
    pub birthday: NaiveDate,
}

#[derive(Deserialize, Validate)]
pub struct UpdateUserModel {
    pub id: Option<u64>,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "validate_login"))]
    pub login: String,
    pub name: Option<String>,
    #[validate(custom(function = "validate_birthday"))]
    pub birthday: NaiveDate,
}

pub struct InsertUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

pub struct UpdateUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: Vec<u64>,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            id: entity.id,
            email: entity.email,
            login: entity.login,
            name: entity.name,
            birthday: entity.birthday,
            friends: entity.friends.into_iter().collect(),
        }
    }
}
