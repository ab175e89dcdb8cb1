use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::macros::string_enum;
use crate::database::models::{AttendanceStatus, UserStatus};
use crate::database::stores::DataStore;
use crate::services::payroll::total_payroll;
use crate::services::stats::{department_distribution, leave_summary};
use crate::utils::format_currency;

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum ReportType {
        Attendance => "attendance",
        Leave => "leave",
        Payroll => "payroll",
        Employee => "employee",
    }
}

fn heading(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(title.len()))
}

fn header(title: &str, today: NaiveDate) -> String {
    format!(
        "{}\nGenerated on: {}\n================================",
        title,
        today.format("%d/%m/%Y")
    )
}

/// Present/absent share per month, oldest month first. Weekends, holidays and
/// leave days are not counted.
fn monthly_attendance(data: &DataStore) -> Vec<String> {
    let mut months: BTreeMap<(i32, u32), (usize, usize)> = BTreeMap::new();
    for record in &data.attendance {
        let entry = months
            .entry((record.date.year(), record.date.month()))
            .or_default();
        match record.status {
            AttendanceStatus::Present | AttendanceStatus::HalfDay => entry.0 += 1,
            AttendanceStatus::Absent => entry.1 += 1,
            _ => {}
        }
    }

    months
        .into_iter()
        .filter(|(_, (present, absent))| present + absent > 0)
        .filter_map(|((year, month), (present, absent))| {
            let label = NaiveDate::from_ymd_opt(year, month, 1)?.format("%b %Y");
            let present_pct = (present * 100 + (present + absent) / 2) / (present + absent);
            Some(format!(
                "{}: Present {}%, Absent {}%",
                label,
                present_pct,
                100 - present_pct
            ))
        })
        .collect()
}

fn attendance_report(data: &DataStore, today: NaiveDate) -> String {
    let employees: Vec<String> = data
        .users
        .iter()
        .map(|u| {
            let present = data
                .attendance
                .iter()
                .filter(|a| a.user_id == u.id && a.status == AttendanceStatus::Present)
                .count();
            format!("{} ({}): {} days present", u.full_name, u.employee_id, present)
        })
        .collect();

    [
        header("ATTENDANCE REPORT", today),
        String::new(),
        heading("MONTHLY ATTENDANCE SUMMARY"),
        monthly_attendance(data).join("\n"),
        String::new(),
        heading("EMPLOYEE WISE ATTENDANCE"),
        employees.join("\n"),
    ]
    .join("\n")
}

fn leave_report(data: &DataStore, today: NaiveDate) -> String {
    let summary = leave_summary(data);
    let details: Vec<String> = data
        .leave_requests
        .iter()
        .map(|l| {
            format!(
                "{} - {} Leave ({} to {}) - {}",
                l.employee_name,
                l.leave_type,
                l.from_date,
                l.to_date,
                l.status.as_str().to_uppercase()
            )
        })
        .collect();

    [
        header("LEAVE REPORT", today),
        String::new(),
        heading("LEAVE REQUESTS SUMMARY"),
        format!("Total Requests: {}", summary.total_requests),
        format!("Approved: {}", summary.approved_requests),
        format!("Pending: {}", summary.pending_requests),
        format!("Rejected: {}", summary.rejected_requests),
        String::new(),
        heading("DETAILED LEAVE RECORDS"),
        details.join("\n"),
    ]
    .join("\n")
}

fn payroll_report(data: &DataStore, today: NaiveDate) -> String {
    let salaries: Vec<String> = data
        .users
        .iter()
        .map(|u| {
            let net = data
                .salary_structure(&u.id)
                .map(|s| format_currency(&s.net_salary))
                .unwrap_or_else(|| "N/A".to_string());
            format!("{} ({}): {}", u.full_name, u.employee_id, net)
        })
        .collect();

    [
        header("PAYROLL REPORT", today),
        String::new(),
        heading("PAYROLL SUMMARY"),
        format!(
            "Total Monthly Payroll: {}",
            format_currency(&total_payroll(data))
        ),
        format!("Total Employees: {}", data.users.len()),
        String::new(),
        heading("EMPLOYEE WISE SALARY"),
        salaries.join("\n"),
    ]
    .join("\n")
}

fn employee_report(data: &DataStore, today: NaiveDate) -> String {
    let count = |status: UserStatus| data.users.iter().filter(|u| u.status == status).count();
    let departments: Vec<String> = department_distribution(data)
        .into_iter()
        .map(|(name, headcount)| format!("{}: {} employees", name, headcount))
        .collect();
    let employees: Vec<String> = data
        .users
        .iter()
        .map(|u| {
            let job = data.job_details(&u.id);
            format!(
                "{} ({}) - {} - {}",
                u.full_name,
                u.employee_id,
                job.map(|j| j.department.as_str()).unwrap_or("N/A"),
                job.map(|j| j.position.as_str()).unwrap_or("N/A")
            )
        })
        .collect();

    [
        header("EMPLOYEE REPORT", today),
        String::new(),
        heading("HEADCOUNT SUMMARY"),
        format!("Total Employees: {}", data.users.len()),
        format!("Active: {}", count(UserStatus::Active)),
        format!("Inactive: {}", count(UserStatus::Inactive)),
        String::new(),
        heading("DEPARTMENT DISTRIBUTION"),
        departments.join("\n"),
        String::new(),
        heading("EMPLOYEE LIST"),
        employees.join("\n"),
    ]
    .join("\n")
}

pub fn render_report(data: &DataStore, report_type: ReportType, today: NaiveDate) -> String {
    let mut body = match report_type {
        ReportType::Attendance => attendance_report(data, today),
        ReportType::Leave => leave_report(data, today),
        ReportType::Payroll => payroll_report(data, today),
        ReportType::Employee => employee_report(data, today),
    };
    body.push('\n');
    body
}

pub fn report_file_name(report_type: ReportType, today: NaiveDate) -> String {
    format!("{}_report_{}.txt", report_type, today.format("%d-%m-%Y"))
}

/// File name and body of a downloadable report.
pub async fn generate(store: &Store, report_type: ReportType, today: NaiveDate) -> (String, String) {
    let data = store.data().await;
    let body = render_report(&data, report_type, today);
    log::info!("Generated {} report", report_type);
    (report_file_name(report_type, today), body)
}
