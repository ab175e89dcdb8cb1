use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::database::Store;
use crate::database::models::{DashboardStats, EmployeeStatus, LeaveStatus, LeaveSummary, User};
use crate::database::stores::DataStore;
use crate::utils::{greeting, initials};

/// Where an employee stands on `today`. Approved leave wins over a check-in.
pub fn employee_status(data: &DataStore, user_id: &str, today: NaiveDate) -> EmployeeStatus {
    let on_leave = data
        .leave_requests_for(user_id)
        .any(|r| r.status == LeaveStatus::Approved && r.covers(today));
    if on_leave {
        return EmployeeStatus::OnLeave;
    }

    match data.attendance_for(user_id, today) {
        Some(record) if record.is_checked_in() => EmployeeStatus::Present,
        _ => EmployeeStatus::Absent,
    }
}

pub fn dashboard_stats(data: &DataStore, today: NaiveDate) -> DashboardStats {
    let mut stats = DashboardStats {
        total_employees: data.users.len(),
        pending_leave_requests: data
            .leave_requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count(),
        ..Default::default()
    };

    for user in &data.users {
        match employee_status(data, &user.id, today) {
            EmployeeStatus::Present => stats.present_today += 1,
            EmployeeStatus::OnLeave => stats.on_leave_today += 1,
            EmployeeStatus::Absent => stats.absent_today += 1,
        }
    }

    stats
}

pub fn leave_summary(data: &DataStore) -> LeaveSummary {
    let count = |status: LeaveStatus| {
        data.leave_requests
            .iter()
            .filter(|r| r.status == status)
            .count()
    };

    LeaveSummary {
        total_requests: data.leave_requests.len(),
        pending_requests: count(LeaveStatus::Pending),
        approved_requests: count(LeaveStatus::Approved),
        rejected_requests: count(LeaveStatus::Rejected),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDayStatus {
    pub user: User,
    pub initials: String,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub greeting: &'static str,
    #[serde(flatten)]
    pub stats: DashboardStats,
}

pub async fn dashboard(store: &Store, now: NaiveDateTime) -> DashboardOverview {
    let data = store.data().await;
    DashboardOverview {
        greeting: greeting(now.hour()),
        stats: dashboard_stats(&data, now.date()),
    }
}

pub async fn statuses(store: &Store, today: NaiveDate) -> Vec<EmployeeDayStatus> {
    let data = store.data().await;
    data.users
        .iter()
        .map(|user| EmployeeDayStatus {
            user: user.clone(),
            initials: initials(&user.full_name),
            status: employee_status(&data, &user.id, today),
        })
        .collect()
}

/// Headcount per department; users without job details count under "N/A".
pub fn department_distribution(data: &DataStore) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for user in &data.users {
        let department = data
            .job_details(&user.id)
            .map(|j| j.department.clone())
            .unwrap_or_else(|| "N/A".to_string());
        *distribution.entry(department).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{
        AttendanceStatus, LeaveRequestUpdate, LeaveType, NewAttendance, NewLeaveRequest,
    };
    use crate::database::seed::sample_users;
    use crate::database::storage::Storage;
    use crate::database::stores::AuthStore;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    }

    fn store_with_users() -> DataStore {
        let mut data = DataStore::new();
        data.users = sample_users();
        data
    }

    fn check_in(data: &mut DataStore, user_id: &str) {
        data.add_attendance(NewAttendance {
            user_id: user_id.to_string(),
            date: today(),
            check_in_time: NaiveTime::from_hms_opt(9, 0, 0),
            check_out_time: None,
            total_hours: None,
            extra_hours: None,
            status: AttendanceStatus::Present,
        });
    }

    fn leave(data: &mut DataStore, user_id: &str, status: LeaveStatus) {
        let id = data
            .add_leave_request(NewLeaveRequest {
                user_id: user_id.to_string(),
                employee_name: "Someone".to_string(),
                employee_id: "EMP".to_string(),
                department: "Engineering".to_string(),
                leave_type: LeaveType::Paid,
                from_date: today(),
                to_date: today(),
                days: 1,
                reason: "Rest".to_string(),
                status: LeaveStatus::Pending,
                admin_remarks: None,
            })
            .id
            .clone();
        data.update_leave_request(
            &id,
            LeaveRequestUpdate {
                status: Some(status),
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_approved_leave_beats_attendance() {
        let mut data = store_with_users();
        check_in(&mut data, "1");
        leave(&mut data, "1", LeaveStatus::Approved);
        assert_eq!(employee_status(&data, "1", today()), EmployeeStatus::OnLeave);
    }

    #[test]
    fn test_pending_leave_does_not_count() {
        let mut data = store_with_users();
        leave(&mut data, "4", LeaveStatus::Pending);
        check_in(&mut data, "4");
        assert_eq!(employee_status(&data, "4", today()), EmployeeStatus::Present);
        assert_eq!(employee_status(&data, "5", today()), EmployeeStatus::Absent);
    }

    #[test]
    fn test_record_without_check_in_is_absent() {
        let mut data = store_with_users();
        data.add_attendance(NewAttendance {
            user_id: "6".to_string(),
            date: today(),
            check_in_time: None,
            check_out_time: None,
            total_hours: None,
            extra_hours: None,
            status: AttendanceStatus::Absent,
        });
        assert_eq!(employee_status(&data, "6", today()), EmployeeStatus::Absent);
    }

    #[test]
    fn test_dashboard_counts() {
        let mut data = store_with_users();
        check_in(&mut data, "1");
        check_in(&mut data, "4");
        leave(&mut data, "5", LeaveStatus::Approved);
        leave(&mut data, "6", LeaveStatus::Pending);

        let stats = dashboard_stats(&data, today());
        assert_eq!(
            stats,
            DashboardStats {
                total_employees: 9,
                present_today: 2,
                on_leave_today: 1,
                absent_today: 6,
                pending_leave_requests: 1,
                pending_attendance_corrections: 0,
            }
        );

        let summary = leave_summary(&data);
        assert_eq!(summary.total_requests, 2);
        assert_eq!(summary.approved_requests, 1);
        assert_eq!(summary.rejected_requests, 0);
    }

    #[test]
    fn test_department_distribution() {
        let data = crate::database::seed::sample_data(today());
        let distribution = department_distribution(&data);
        assert_eq!(distribution.get("Engineering"), Some(&3));
        assert_eq!(distribution.get("N/A"), Some(&1));
    }

    #[tokio::test]
    async fn test_dashboard_greets_by_hour() {
        let mut data = store_with_users();
        check_in(&mut data, "1");
        let store = Store::new(Storage::memory(), AuthStore::new(), data);

        let morning = today().and_hms_opt(9, 15, 0).unwrap();
        let overview = dashboard(&store, morning).await;
        assert_eq!(overview.greeting, "Good morning");
        assert_eq!(overview.stats.present_today, 1);
        assert_eq!(overview.stats.absent_today, 8);

        let evening = today().and_hms_opt(19, 0, 0).unwrap();
        assert_eq!(dashboard(&store, evening).await.greeting, "Good evening");

        let json = serde_json::to_value(dashboard(&store, morning).await).unwrap();
        assert_eq!(json["presentToday"], 1);
        assert_eq!(json["greeting"], "Good morning");
    }

    #[tokio::test]
    async fn test_statuses_carry_initials() {
        let store = Store::new(Storage::memory(), AuthStore::new(), store_with_users());
        let statuses = statuses(&store, today()).await;
        assert_eq!(statuses.len(), 9);
        assert_eq!(statuses[0].initials, "RS");
        assert_eq!(statuses[0].status, EmployeeStatus::Absent);
    }
}
