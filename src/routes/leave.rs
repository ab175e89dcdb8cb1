use actix_web::web;

use crate::handlers::leave;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/leave")
            .route("", web::post().to(leave::apply_leave))
            .route("", web::get().to(leave::get_leave_requests))
            .route("/balance", web::get().to(leave::get_my_balance))
            .route("/balance/{user_id}", web::get().to(leave::get_balance))
            .route("/{id}", web::get().to(leave::get_leave_request))
            .route("/{id}/approve", web::post().to(leave::approve_leave_request))
            .route("/{id}/reject", web::post().to(leave::reject_leave_request)),
    );
}
