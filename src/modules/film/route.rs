use crate::modules::film::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/films")
            .service(list_films)
            .service(create_film)
            .service(update_film)
            .service(popular_films)
            .service(get_film)
            .service(like_film)
            .service(unlike_film),
    );
}
