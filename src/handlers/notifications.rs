use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::{UserContext, notifications};

/// Notifications of the signed-in user, newest first
pub async fn get_notifications(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let feed = notifications::feed(&state.store, ctx.user_id()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(feed)))
}

pub async fn mark_read(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let notification = notifications::mark_read(&state.store, &ctx, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(notification)))
}

pub async fn mark_all_read(
    ctx: UserContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let changed = notifications::mark_all_read(&state.store, ctx.user_id()).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        Some(changed),
        "All notifications marked as read",
    )))
}
