use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::attendance::{self, AttendanceQuery, CalendarQuery};
use crate::services::{UserContext, auth};
use crate::utils::format_time;

pub async fn check_in(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let record = attendance::check_in(&state.store, ctx.user_id(), Local::now().naive_local()).await?;
    let message = record
        .check_in_time
        .map(|t| format!("Checked in at {}", format_time(t)))
        .unwrap_or_else(|| "Checked in".to_string());
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(record), &message)))
}

pub async fn check_out(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let record =
        attendance::check_out(&state.store, ctx.user_id(), Local::now().naive_local()).await?;
    let message = record
        .check_out_time
        .map(|t| format!("Checked out at {}", format_time(t)))
        .unwrap_or_else(|| "Checked out".to_string());

    // Checking out ends the working session
    auth::sign_out(&state.store).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(record), &message)))
}

/// Today's record for the signed-in user, if any
pub async fn get_today(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let record =
        attendance::today_for(&state.store, ctx.user_id(), Local::now().date_naive()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}

/// A month of attendance for the calendar view
pub async fn get_calendar(
    ctx: UserContext,
    state: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let user_id = match query.user_id {
        Some(id) if ctx.is_hr_or_admin() => id,
        _ => ctx.user_id().to_string(),
    };

    let calendar =
        attendance::month_calendar(&state.store, &user_id, query.year, query.month).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(calendar)))
}

/// Attendance history with optional filtering
pub async fn get_attendance(
    ctx: UserContext,
    state: web::Data<AppState>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, AppError> {
    let mut query = query.into_inner();

    // Employees can only see their own records
    if !ctx.is_hr_or_admin() {
        query.user_id = Some(ctx.user_id().to_string());
    }

    let records = attendance::list_attendance(&state.store, &query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(records)))
}
