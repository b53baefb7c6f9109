use crate::modules::user::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(list_users)
            .service(create_user)
            .service(update_user)
            .service(get_user)
            .configure(crate::modules::friend::route::configure),
    );
}
