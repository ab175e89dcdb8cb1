use actix_web::web;

use crate::handlers::attendance;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .route("", web::get().to(attendance::get_attendance))
            .route("/today", web::get().to(attendance::get_today))
            .route("/calendar", web::get().to(attendance::get_calendar))
            .route("/check-in", web::post().to(attendance::check_in))
            .route("/check-out", web::post().to(attendance::check_out)),
    );
}
