use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    // Copied from the user and job details when the request is created.
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub days: i64,
    pub reason: String,
    pub status: LeaveStatus,
    pub admin_remarks: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
    pub enum LeaveType {
        Paid => "paid",
        Sick => "sick",
        Unpaid => "unpaid",
        Casual => "casual",
        Emergency => "emergency",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum LeaveStatus {
        #[default]
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

impl LeaveStatus {
    /// Approved and rejected requests never change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

impl LeaveRequest {
    /// Inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from_date <= date && date <= self.to_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub user_id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub days: i64,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    pub admin_remarks: Option<String>,
}

impl NewLeaveRequest {
    pub fn into_request(self, id: String, applied_at: DateTime<Utc>) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id: self.user_id,
            employee_name: self.employee_name,
            employee_id: self.employee_id,
            department: self.department,
            leave_type: self.leave_type,
            from_date: self.from_date,
            to_date: self.to_date,
            days: self.days,
            reason: self.reason,
            status: self.status,
            admin_remarks: self.admin_remarks,
            applied_at,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestUpdate {
    pub leave_type: Option<LeaveType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub days: Option<i64>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
    pub admin_remarks: Option<String>,
}

impl LeaveRequestUpdate {
    pub fn apply_to(self, request: &mut LeaveRequest, now: DateTime<Utc>) {
        if let Some(leave_type) = self.leave_type {
            request.leave_type = leave_type;
        }
        if let Some(from_date) = self.from_date {
            request.from_date = from_date;
        }
        if let Some(to_date) = self.to_date {
            request.to_date = to_date;
        }
        if let Some(days) = self.days {
            request.days = days;
        }
        if let Some(reason) = self.reason {
            request.reason = reason;
        }
        if let Some(status) = self.status {
            if request.status.is_terminal() && status != request.status {
                log::warn!(
                    "Ignoring status change {} -> {} on decided leave request {}",
                    request.status,
                    status,
                    request.id
                );
            } else {
                request.status = status;
            }
        }
        if let Some(remarks) = self.admin_remarks {
            request.admin_remarks = Some(remarks);
        }
        request.updated_at = Some(now);
    }
}

/// Remaining leave days per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaveBalance {
    pub paid: i32,
    pub sick: i32,
    pub unpaid: i32,
    pub casual: i32,
    pub emergency: i32,
}

impl Default for LeaveBalance {
    fn default() -> Self {
        Self {
            paid: 15,
            sick: 10,
            unpaid: 0,
            casual: 7,
            emergency: 3,
        }
    }
}

impl LeaveBalance {
    pub fn for_type(&self, leave_type: LeaveType) -> i32 {
        match leave_type {
            LeaveType::Paid => self.paid,
            LeaveType::Sick => self.sick,
            LeaveType::Unpaid => self.unpaid,
            LeaveType::Casual => self.casual,
            LeaveType::Emergency => self.emergency,
        }
    }

    /// Total of the categories shown to employees; unpaid leave is not counted.
    pub fn total_available(&self) -> i32 {
        self.paid + self.sick + self.casual + self.emergency
    }
}
