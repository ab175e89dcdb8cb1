use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, text_attachment};
use crate::services::reports::{self, ReportType};
use crate::services::{UserContext, stats};

/// Greeting, headcount and today's attendance overview
pub async fn get_dashboard_stats(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let overview = stats::dashboard(&state.store, Local::now().naive_local()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(overview)))
}

pub async fn get_leave_stats(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let summary = stats::leave_summary(&*state.store.data().await);
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// Download a text report
pub async fn download_report(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let report_type = path
        .into_inner()
        .parse::<ReportType>()
        .map_err(AppError::BadRequest)?;
    let (file_name, body) =
        reports::generate(&state.store, report_type, Local::now().date_naive()).await;
    Ok(text_attachment(file_name, body))
}
