use actix_web::{HttpResponse, web};
use chrono::Local;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::employees::{self, CreateEmployeeRequest, EmployeeQuery};
use crate::services::{UserContext, stats};

/// Employee directory with optional search and status filtering
pub async fn list_employees(
    ctx: UserContext,
    state: web::Data<AppState>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let employees =
        employees::list_employees(&state.store, &query, Local::now().date_naive()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}

/// Add an employee and hand back a temporary password
pub async fn create_employee(
    ctx: UserContext,
    state: web::Data<AppState>,
    input: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let created = employees::create_employee(
        &state.store,
        &state.config.company_name,
        input.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        Some(created),
        "Employee added successfully!",
    )))
}

pub async fn get_employee(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_access_to(&user_id)?;

    let record = employees::get_employee(&state.store, &user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}

/// Today's present/absent/on-leave state for everyone
pub async fn employee_statuses(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let statuses = stats::statuses(&state.store, Local::now().date_naive()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(statuses)))
}
