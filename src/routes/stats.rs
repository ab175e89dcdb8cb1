use actix_web::web;

use crate::handlers::stats;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stats")
            .route("/dashboard", web::get().to(stats::get_dashboard_stats))
            .route("/leave", web::get().to(stats::get_leave_stats)),
    )
    .service(
        web::scope("/reports")
            .route("/{report_type}", web::get().to(stats::download_report)),
    );
}
