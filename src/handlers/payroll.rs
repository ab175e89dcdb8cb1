use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, text_attachment};
use crate::services::payroll::OverviewQuery;
use crate::services::{UserContext, payroll};

/// Total monthly payroll
pub async fn get_summary(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let summary = payroll::summary(&state.store, Local::now().date_naive()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// Notify every employee that this month's payslip is available
pub async fn send_payslips(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let sent = payroll::send_payslips(&state.store, Local::now().date_naive()).await;
    let message = format!("Sent payslips to {} employees", sent);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(sent), &message)))
}

/// The signed-in user's salary card, masked unless `showSalary=true`
pub async fn get_my_overview(
    ctx: UserContext,
    state: web::Data<AppState>,
    query: web::Query<OverviewQuery>,
) -> Result<HttpResponse, AppError> {
    let overview =
        payroll::salary_overview(&state.store, ctx.user_id(), query.show_salary).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(overview)))
}

pub async fn get_my_payslips(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payslips = payroll::payslips_for(&state.store, ctx.user_id()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(payslips)))
}

pub async fn get_salary_structure(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_access_to(&user_id)?;
    let salary = payroll::salary_structure(&state.store, &user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(salary)))
}

/// Text payslip for one employee
pub async fn download_payslip(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_hr_or_admin()?;
    let (file_name, body) =
        payroll::download_payslip(&state.store, &user_id, Local::now().date_naive()).await?;
    Ok(text_attachment(file_name, body))
}
