use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::macros::string_enum;
use crate::database::models::{
    LeaveBalance, LeaveRequest, LeaveRequestUpdate, LeaveStatus, LeaveType, NewLeaveRequest,
    NewNotification, NotificationType, User,
};
use crate::error::AppError;
use crate::utils::{days_between, format_date};

const DEFAULT_DEPARTMENT: &str = "General";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveRequest {
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum LeaveDecision {
        Approve => "approve",
        Reject => "reject",
    }
}

impl LeaveDecision {
    pub fn status(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            LeaveDecision::Approve => "approved",
            LeaveDecision::Reject => "rejected",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            LeaveDecision::Approve => "Leave Request Approved",
            LeaveDecision::Reject => "Leave Request Rejected",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    #[serde(default)]
    pub admin_remarks: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveQuery {
    pub user_id: Option<String>,
    pub status: Option<LeaveStatus>,
}

/// Files a pending request for `user`, denormalizing name, employee id and department.
pub async fn apply(
    store: &Store,
    user: &User,
    request: ApplyLeaveRequest,
) -> Result<LeaveRequest, AppError> {
    if request.reason.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please fill all required fields".to_string(),
        ));
    }

    let created = store
        .mutate_data(|data| {
            let department = data
                .job_details(&user.id)
                .map(|job| job.department.clone())
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string());

            data.add_leave_request(NewLeaveRequest {
                user_id: user.id.clone(),
                employee_name: user.full_name.clone(),
                employee_id: user.employee_id.clone(),
                department,
                leave_type: request.leave_type,
                from_date: request.from_date,
                to_date: request.to_date,
                days: days_between(request.from_date, request.to_date),
                reason: request.reason.trim().to_string(),
                status: LeaveStatus::Pending,
                admin_remarks: None,
            })
            .clone()
        })
        .await;

    log::info!(
        "{} applied for {} days of {} leave",
        created.employee_id,
        created.days,
        created.leave_type
    );
    Ok(created)
}

pub fn decision_message(
    request: &LeaveRequest,
    decision: LeaveDecision,
    remarks: Option<&str>,
) -> String {
    let note = remarks
        .filter(|r| !r.is_empty())
        .map(|r| format!(" Note: {}", r))
        .unwrap_or_default();

    format!(
        "Your {} leave request for {} - {} has been {}.{}",
        request.leave_type,
        format_date(request.from_date),
        format_date(request.to_date),
        decision.past_tense(),
        note
    )
}

/// Approves or rejects a pending request and notifies its employee.
/// Balances are left as they are.
pub async fn decide(
    store: &Store,
    request_id: &str,
    decision: LeaveDecision,
    remarks: Option<String>,
) -> Result<LeaveRequest, AppError> {
    store
        .mutate_data(|data| {
            let current = data
                .find_leave_request(request_id)
                .ok_or_else(|| AppError::not_found("Leave request", request_id))?;
            if current.status != LeaveStatus::Pending {
                return Err(AppError::BadRequest(format!(
                    "Leave request {} is already {}",
                    request_id, current.status
                )));
            }

            let updated = data
                .update_leave_request(
                    request_id,
                    LeaveRequestUpdate {
                        status: Some(decision.status()),
                        admin_remarks: remarks.clone(),
                        ..Default::default()
                    },
                )
                .cloned()
                .ok_or_else(|| AppError::not_found("Leave request", request_id))?;

            data.add_notification(NewNotification::unread(
                updated.user_id.clone(),
                NotificationType::Leave,
                decision.title(),
                decision_message(&updated, decision, remarks.as_deref()),
            ));

            log::info!("Leave request {} {}", request_id, decision.past_tense());
            Ok(updated)
        })
        .await
}

/// Matching requests, most recently applied first.
pub async fn list_requests(store: &Store, query: &LeaveQuery) -> Vec<LeaveRequest> {
    let data = store.data().await;
    let mut requests: Vec<LeaveRequest> = data
        .leave_requests
        .iter()
        .filter(|r| query.user_id.as_deref().is_none_or(|id| r.user_id == id))
        .filter(|r| query.status.is_none_or(|status| r.status == status))
        .cloned()
        .collect();
    requests.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    requests
}

pub async fn get_request(store: &Store, request_id: &str) -> Result<LeaveRequest, AppError> {
    store
        .data()
        .await
        .find_leave_request(request_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Leave request", request_id))
}

/// Users without a stored balance see the default allotment.
pub async fn balance(store: &Store, user_id: &str) -> LeaveBalance {
    store
        .data()
        .await
        .leave_balance(user_id)
        .copied()
        .unwrap_or_default()
}
