use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::macros::string_enum;
use crate::database::models::{JobInfo, User, UserRole, UserStatus};
use crate::database::stores::{DataStore, generate_id};
use crate::error::AppError;
use crate::utils::{
    PasswordCheck, PasswordStrength, generate_employee_id, password_strength, validate_email,
    validate_password,
};

string_enum! {
    /// Which sign-in screen the request came from.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum Portal {
        #[default]
        Employee => "employee",
        Admin => "admin",
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    /// Email or employee id.
    pub login_id: String,
    pub password: String,
    #[serde(default)]
    pub portal: Portal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub company_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

fn require_present(fields: &[&str], message: &str) -> Result<(), AppError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}

/// Users created in `year`, plus one.
pub fn next_serial(data: &DataStore, year: i32) -> u32 {
    let created = data
        .users
        .iter()
        .filter(|u| u.created_at.year() == year)
        .count();
    u32::try_from(created).unwrap_or(u32::MAX - 1) + 1
}

/// Looks the user up by email or employee id and makes them the current identity.
/// The password must be present but is not verified.
pub async fn sign_in(store: &Store, request: SignInRequest) -> Result<User, AppError> {
    require_present(
        &[&request.login_id, &request.password],
        "Please fill in all fields",
    )?;

    let user = store
        .data()
        .await
        .find_user_by_login(&request.login_id)
        .cloned()
        .ok_or_else(|| {
            log::warn!("Sign-in failed for {}", request.login_id);
            AppError::Unauthorized
        })?;

    if request.portal == Portal::Admin && !user.role.is_hr_or_admin() {
        return Err(AppError::Forbidden(
            "This account does not have HR/Admin access".to_string(),
        ));
    }

    store.mutate_auth(|auth| auth.login(user.clone())).await;
    Ok(user)
}

pub async fn sign_out(store: &Store) {
    store.mutate_auth(|auth| auth.logout()).await;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheckRequest {
    pub password: String,
}

/// Advisory feedback for a password form. Nothing is rejected on its basis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordFeedback {
    #[serde(flatten)]
    pub check: PasswordCheck,
    pub strength: PasswordStrength,
}

pub fn password_feedback(password: &str) -> PasswordFeedback {
    PasswordFeedback {
        check: validate_password(password),
        strength: password_strength(password),
    }
}

/// Accepts a reset request for any well-formed address. No mail is sent.
pub fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }
    if !validate_email(email) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }
    log::info!("Password reset requested for {}", email);
    Ok(())
}

/// Registers a company's first HR account and signs it in.
/// Only presence and the password confirmation are checked.
pub async fn sign_up(store: &Store, request: SignUpRequest) -> Result<User, AppError> {
    require_present(
        &[
            &request.company_name,
            &request.full_name,
            &request.email,
            &request.phone,
            &request.password,
            &request.confirm_password,
        ],
        "Please fill in all fields",
    )?;

    if request.password != request.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    let now = Utc::now();
    let user = store
        .mutate_data(|data| {
            let user = new_user(
                data,
                &request.company_name,
                &request.full_name,
                &request.email,
                UserRole::Hr,
                now,
            );
            let user = data
                .add_user(
                    user,
                    Some(JobInfo {
                        phone: Some(request.phone.clone()),
                        ..Default::default()
                    }),
                )
                .clone();
            if let Some(job) = data.job_details.get_mut(&user.id) {
                job.company = Some(request.company_name.clone());
            }
            user
        })
        .await;

    log::info!("Created HR account {} for {}", user.employee_id, request.company_name);
    store.mutate_auth(|auth| auth.login(user.clone())).await;
    Ok(user)
}

/// A fresh active user with a generated employee id.
pub fn new_user(
    data: &DataStore,
    company: &str,
    full_name: &str,
    email: &str,
    role: UserRole,
    now: DateTime<Utc>,
) -> User {
    let employee_id = generate_employee_id(
        company,
        full_name.trim(),
        now.year(),
        next_serial(data, now.year()),
    );

    User {
        id: generate_id(),
        employee_id,
        email: email.trim().to_string(),
        full_name: full_name.trim().to_string(),
        role,
        status: UserStatus::Active,
        profile_picture: None,
        created_at: now,
    }
}
