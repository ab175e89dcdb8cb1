use actix_web::web;

use crate::handlers::auth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/sign-up", web::post().to(auth::sign_up))
            .route("/forgot-password", web::post().to(auth::forgot_password))
            .route("/password-strength", web::post().to(auth::password_strength))
            .route("/me", web::get().to(auth::me))
            .route("/me", web::put().to(auth::update_me)),
    );
}
