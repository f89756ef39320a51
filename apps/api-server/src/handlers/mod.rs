//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::get_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}/like", web::put().to(posts::like_dislike))
                .route("/{id}/like", web::patch().to(posts::like_dislike))
                .route("/{id}", web::put().to(posts::edit_post))
                .route("/{id}", web::patch().to(posts::edit_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        )
        .service(web::scope("/users").route("", web::get().to(users::get_users)));
}
