use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::database::models::UserUpdate;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::auth::{
    self, ForgotPasswordRequest, PasswordCheckRequest, SignInRequest, SignUpRequest,
};
use crate::services::{UserContext, profiles};

/// Sign in with an email or employee id
pub async fn login(
    state: web::Data<AppState>,
    input: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    let user = auth::sign_in(&state.store, input.into_inner()).await?;
    let message = format!("Welcome back, {}!", user.full_name);
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(user), &message)))
}

pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    auth::sign_out(&state.store).await;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
        None,
        "Signed out",
    )))
}

/// Register a company and its first HR account
pub async fn sign_up(
    state: web::Data<AppState>,
    input: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let user = auth::sign_up(&state.store, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        Some(user),
        "Account created successfully!",
    )))
}

pub async fn forgot_password(
    input: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    auth::forgot_password(&input)?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
        None,
        "Password reset link sent!",
    )))
}

/// Live rule check and strength meter for a password field
pub async fn password_strength(
    input: web::Json<PasswordCheckRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(auth::password_feedback(
        &input.password,
    ))))
}

pub async fn me(ctx: UserContext) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(ctx.user)))
}

/// Update the signed-in identity
pub async fn update_me(
    _ctx: UserContext,
    state: web::Data<AppState>,
    input: web::Json<UserUpdate>,
) -> Result<HttpResponse, AppError> {
    let user = profiles::update_current_user(&state.store, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
