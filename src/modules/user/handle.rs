use actix_web::{get, post, put, web};

use crate::modules::user::{model, service::UserService};
use crate::{
    api::{error, success},
    utils::ValidatedJson,
};

#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<Vec<model::UserResponse>>, error::Error> {
    let users = user_service.get_all().await?;
    Ok(success::Success::ok(users, "Users retrieved successfully"))
}

#[get("/{id:\\d+}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<u64>,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let user = user_service.get_by_id(user_id.into_inner()).await?;
    Ok(success::Success::ok(user, "User retrieved successfully"))
}

#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::CreateUserModel>,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let user = user_service.create(user_data.0).await?;
    Ok(success::Success::created(user, "User created successfully"))
}

#[put("")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::UpdateUserModel>,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let user = user_service.update(user_data.0).await?;
    Ok(success::Success::ok(user, "User updated successfully"))
}
