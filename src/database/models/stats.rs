use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: usize,
    pub on_leave_today: usize,
    pub absent_today: usize,
    pub pending_leave_requests: usize,
    /// Attendance corrections are not modeled; always zero.
    pub pending_attendance_corrections: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub total_requests: usize,
    pub pending_requests: usize,
    pub approved_requests: usize,
    pub rejected_requests: usize,
}

string_enum! {
    /// Derived daily state of an employee, never stored.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum EmployeeStatus {
        Present => "present",
        Absent => "absent",
        OnLeave => "on_leave",
    }
}
