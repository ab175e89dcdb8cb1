use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::UserContext;
use crate::services::leave::{self, ApplyLeaveRequest, DecisionRequest, LeaveDecision, LeaveQuery};

/// Apply for leave as the signed-in user
pub async fn apply_leave(
    ctx: UserContext,
    state: web::Data<AppState>,
    input: web::Json<ApplyLeaveRequest>,
) -> Result<HttpResponse, AppError> {
    let request = leave::apply(&state.store, &ctx.user, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        Some(request),
        "Leave request submitted successfully!",
    )))
}

/// Leave requests with optional filtering
pub async fn get_leave_requests(
    ctx: UserContext,
    state: web::Data<AppState>,
    query: web::Query<LeaveQuery>,
) -> Result<HttpResponse, AppError> {
    let mut query = query.into_inner();

    // Employees can only see their own requests
    if !ctx.is_hr_or_admin() {
        query.user_id = Some(ctx.user_id().to_string());
    }

    let requests = leave::list_requests(&state.store, &query).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

pub async fn get_leave_request(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let request = leave::get_request(&state.store, &path.into_inner()).await?;
    ctx.requires_access_to(&request.user_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

/// Remaining leave days of the signed-in user
pub async fn get_my_balance(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let balance = leave::balance(&state.store, ctx.user_id()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(balance)))
}

pub async fn get_balance(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_access_to(&user_id)?;
    let balance = leave::balance(&state.store, &user_id).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(balance)))
}

async fn decide(
    ctx: UserContext,
    state: web::Data<AppState>,
    request_id: String,
    decision: LeaveDecision,
    input: Option<web::Json<DecisionRequest>>,
) -> Result<HttpResponse, AppError> {
    ctx.requires_hr_or_admin()?;
    let remarks = input.and_then(|body| body.into_inner().admin_remarks);
    let request = leave::decide(&state.store, &request_id, decision, remarks).await?;
    let message = format!("Leave request {} successfully", request.status);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(request), &message)))
}

pub async fn approve_leave_request(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: Option<web::Json<DecisionRequest>>,
) -> Result<HttpResponse, AppError> {
    decide(ctx, state, path.into_inner(), LeaveDecision::Approve, input).await
}

pub async fn reject_leave_request(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: Option<web::Json<DecisionRequest>>,
) -> Result<HttpResponse, AppError> {
    decide(ctx, state, path.into_inner(), LeaveDecision::Reject, input).await
}
