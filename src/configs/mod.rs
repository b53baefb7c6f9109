use actix_web::web::{self, ServiceConfig};
use std::sync::Arc;

use crate::modules::{
    self,
    film::{handle::FilmSvc, repository_mem::FilmRepositoryMem, service::FilmService},
    friend::{handle::FriendSvc, service::FriendService},
    user::{repository_mem::UserRepositoryMem, service::UserService},
};

/// Services shared by every worker. Cloning is cheap; clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub film_service: FilmSvc,
    pub friend_service: FriendSvc,
}

impl AppState {
    pub fn in_memory() -> Self {
        let user_repo = Arc::new(UserRepositoryMem::new());
        let film_repo = Arc::new(FilmRepositoryMem::new());

        let user_service = UserService::with_dependencies(user_repo.clone());
        let film_service = FilmService::with_dependencies(film_repo, user_repo.clone());
        let friend_service = FriendService::with_dependencies(user_repo);

        Self { user_service, film_service, friend_service }
    }
}

pub fn configure(state: AppState) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(state.user_service))
            .app_data(web::Data::new(state.film_service))
            .app_data(web::Data::new(state.friend_service))
            .configure(modules::film::route::configure)
            .configure(modules::user::route::configure);
    }
}
