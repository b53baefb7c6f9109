use actix_web::{delete, get, put, web};

use crate::{
    api::{error, success},
    modules::{
        friend::service::FriendService, user::model::UserResponse,
        user::repository_mem::UserRepositoryMem,
    },
};

pub type FriendSvc = FriendService<UserRepositoryMem>;

#[put("/{id:\\d+}/friends/{friend_id:\\d+}")]
pub async fn add_friend(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    friend_service.add_friend(user_id, friend_id).await?;
    Ok(success::Success::empty())
}

#[delete("/{id:\\d+}/friends/{friend_id:\\d+}")]
pub async fn remove_friend(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    friend_service.remove_friend(user_id, friend_id).await?;
    Ok(success::Success::empty())
}

#[get("/{id:\\d+}/friends")]
pub async fn list_friends(
    friend_service: web::Data<FriendSvc>,
    user_id: web::Path<u64>,
) -> Result<success::Success<Vec<UserResponse>>, error::Error> {
    let friends = friend_service.get_friends(user_id.into_inner()).await?;
    Ok(success::Success::ok(friends, "Friends retrieved successfully"))
}

#[get("/{id:\\d+}/friends/common/{other_id:\\d+}")]
pub async fn list_common_friends(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<Vec<UserResponse>>, error::Error> {
    let (user_id, other_user_id) = path.into_inner();
    let friends = friend_service.get_common_friends(user_id, other_user_id).await?;
    Ok(success::Success::ok(friends, "Common friends retrieved successfully"))
}
