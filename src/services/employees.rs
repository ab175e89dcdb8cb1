use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::{
    EmployeeStatus, JobDetails, JobInfo, LeaveBalance, Profile, SalaryStructure, User, UserRole,
};
use crate::database::stores::DataStore;
use crate::error::AppError;
use crate::services::auth::new_user;
use crate::services::stats::employee_status;
use crate::utils::initials;

const TEMP_PASSWORD_LEN: usize = 8;
const TEMP_PASSWORD_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEmployee {
    pub user: User,
    /// Shown once to whoever added the employee; never stored.
    pub temporary_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    /// Case-insensitive match on name, email or employee id.
    pub search: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeQuery {
    fn matches_search(&self, user: &User) -> bool {
        let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        [&user.full_name, &user.email, &user.employee_id]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Everything known about one employee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub user: User,
    pub initials: String,
    pub profile: Option<Profile>,
    pub job_details: Option<JobDetails>,
    pub salary_structure: Option<SalaryStructure>,
    pub leave_balance: Option<LeaveBalance>,
}

impl EmployeeRecord {
    pub fn collect(data: &DataStore, user: &User) -> Self {
        Self {
            user: user.clone(),
            initials: initials(&user.full_name),
            profile: data.profile(&user.id).cloned(),
            job_details: data.job_details(&user.id).cloned(),
            salary_structure: data.salary_structure(&user.id).cloned(),
            leave_balance: data.leave_balance(&user.id).copied(),
        }
    }
}

pub fn temporary_password<R: Rng>(rng: &mut R) -> String {
    (0..TEMP_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TEMP_PASSWORD_ALPHABET.len());
            TEMP_PASSWORD_ALPHABET[idx] as char
        })
        .collect()
}

pub async fn create_employee(
    store: &Store,
    company: &str,
    request: CreateEmployeeRequest,
) -> Result<CreatedEmployee, AppError> {
    if request.full_name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please fill in required fields".to_string(),
        ));
    }

    let now = Utc::now();
    let user = store
        .mutate_data(|data| {
            let user = new_user(
                data,
                company,
                &request.full_name,
                &request.email,
                UserRole::Employee,
                now,
            );
            data.add_user(
                user,
                Some(JobInfo {
                    department: request.department,
                    position: request.position,
                    phone: request.phone,
                }),
            )
            .clone()
        })
        .await;

    log::info!("Added employee {} ({})", user.employee_id, user.full_name);

    Ok(CreatedEmployee {
        user,
        temporary_password: temporary_password(&mut rand::rng()),
    })
}

/// Directory entries matching the search text and, when given, today's status.
pub async fn list_employees(
    store: &Store,
    query: &EmployeeQuery,
    today: NaiveDate,
) -> Vec<EmployeeRecord> {
    let data = store.data().await;
    data.users
        .iter()
        .filter(|user| query.matches_search(user))
        .filter(|user| {
            query
                .status
                .is_none_or(|status| employee_status(&data, &user.id, today) == status)
        })
        .map(|user| EmployeeRecord::collect(&data, user))
        .collect()
}

pub async fn get_employee(store: &Store, user_id: &str) -> Result<EmployeeRecord, AppError> {
    let data = store.data().await;
    let user = data
        .find_user(user_id)
        .ok_or_else(|| AppError::not_found("Employee", user_id))?;
    Ok(EmployeeRecord::collect(&data, user))
}
