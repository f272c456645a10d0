use actix_web::{HttpResponse, web};

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/donations")
            .service(web::resource("/preview").route(web::post().to(handlers::donations::preview)))
            .service(web::resource("/submit").route(web::post().to(handlers::donations::submit))),
    )
    .service(
        web::scope("/contact")
            .service(
                web::resource("/quick-messages")
                    .route(web::get().to(handlers::contact::quick_messages)),
            )
            .service(web::resource("/send").route(web::post().to(handlers::contact::send))),
    )
    .service(
        web::resource("/charity/gallery")
            .route(web::get().to(handlers::gallery::all))
            .route(web::head().to(HttpResponse::MethodNotAllowed)),
    )
    .service(web::resource("/testimonies").route(web::get().to(handlers::testimonies::all)));
}
