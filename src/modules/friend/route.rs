use crate::modules::friend::handle::*;
use actix_web::web::ServiceConfig;

/// Registered inside the `/users` scope.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(add_friend)
        .service(remove_friend)
        .service(list_friends)
        .service(list_common_friends);
}
