use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::database::models::ProfileUpdate;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::{UserContext, profiles};

pub async fn get_profile(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_access_to(&user_id)?;
    let profile = profiles::get_profile(&state.store, &user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

/// Merge the given fields into a profile
pub async fn update_profile(
    ctx: UserContext,
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: web::Json<ProfileUpdate>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    ctx.requires_access_to(&user_id)?;
    let profile = profiles::update_profile(&state.store, &user_id, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        Some(profile),
        "Profile updated successfully!",
    )))
}
