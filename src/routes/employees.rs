use actix_web::web;

use crate::handlers::{employees, profiles};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(employees::list_employees))
            .route("", web::post().to(employees::create_employee))
            .route("/status", web::get().to(employees::employee_statuses))
            .route("/{user_id}", web::get().to(employees::get_employee)),
    )
    .service(
        web::scope("/profiles")
            .route("/{user_id}", web::get().to(profiles::get_profile))
            .route("/{user_id}", web::put().to(profiles::update_profile)),
    );
}
