use actix_web::web;

pub mod attendance;
pub mod auth;
pub mod employees;
pub mod leave;
pub mod notifications;
pub mod payroll;
pub mod stats;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(employees::configure)
            .configure(attendance::configure)
            .configure(leave::configure)
            .configure(notifications::configure)
            .configure(payroll::configure)
            .configure(stats::configure),
    );
}
