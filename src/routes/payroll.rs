use actix_web::web;

use crate::handlers::payroll;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payroll")
            .route("/summary", web::get().to(payroll::get_summary))
            .route("/send-payslips", web::post().to(payroll::send_payslips))
            .route("/payslips", web::get().to(payroll::get_my_payslips))
            .route("/overview", web::get().to(payroll::get_my_overview))
            .route("/salary/{user_id}", web::get().to(payroll::get_salary_structure))
            .route(
                "/payslips/{user_id}/download",
                web::get().to(payroll::download_payslip),
            ),
    );
}
