use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::Store;
use crate::database::models::{NewNotification, NotificationType, Payslip, SalaryStructure, User};
use crate::database::stores::DataStore;
use crate::error::AppError;
use crate::utils::{format_currency, mask_bank_account, mask_salary};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub period: String,
    pub total_monthly_payroll: BigDecimal,
    pub total_employees: usize,
    pub employees_with_salary: usize,
}

/// `January 2024`
pub fn period_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Sum of every stored net salary, whether or not its user still exists.
pub fn total_payroll(data: &DataStore) -> BigDecimal {
    data.salary_structures
        .values()
        .map(|s| &s.net_salary)
        .fold(BigDecimal::from(0), |acc, net| acc + net)
}

pub async fn summary(store: &Store, today: NaiveDate) -> PayrollSummary {
    let data = store.data().await;
    PayrollSummary {
        period: period_label(today),
        total_monthly_payroll: total_payroll(&data),
        total_employees: data.users.len(),
        employees_with_salary: data.salary_structures.len(),
    }
}

/// One "Payslip Available" notification per user. Returns how many were sent.
pub async fn send_payslips(store: &Store, today: NaiveDate) -> usize {
    let period = period_label(today);
    let sent = store
        .mutate_data(|data| {
            let user_ids: Vec<String> = data.users.iter().map(|u| u.id.clone()).collect();
            for user_id in &user_ids {
                data.add_notification(NewNotification::unread(
                    user_id.clone(),
                    NotificationType::Payroll,
                    "Payslip Available",
                    format!("Your payslip for {} is now available for download.", period),
                ));
            }
            user_ids.len()
        })
        .await;

    log::info!("Sent {} payslip notifications for {}", sent, period);
    sent
}

pub async fn payslips_for(store: &Store, user_id: &str) -> Vec<Payslip> {
    store.data().await.payslips_for(user_id).cloned().collect()
}

pub async fn salary_structure(store: &Store, user_id: &str) -> Result<SalaryStructure, AppError> {
    store
        .data()
        .await
        .salary_structure(user_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Salary structure", user_id))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    #[serde(default)]
    pub show_salary: bool,
}

/// A user's own pay at a glance. Amounts stay masked unless revealed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryOverview {
    pub net_salary: String,
    pub gross_salary: String,
    pub ytd_earnings: String,
    pub ytd_deductions: String,
    pub bank_account: Option<String>,
}

pub async fn salary_overview(store: &Store, user_id: &str, show_salary: bool) -> SalaryOverview {
    let data = store.data().await;
    let salary = data.salary_structure(user_id);
    let zero = BigDecimal::from(0);

    let (ytd_earnings, ytd_deductions) = data.payslips_for(user_id).fold(
        (zero.clone(), zero.clone()),
        |(earned, deducted), p| {
            (
                earned + &p.gross_salary,
                deducted + &p.deductions.pf + &p.deductions.professional_tax,
            )
        },
    );

    let amount = |value: &BigDecimal| {
        if show_salary {
            format_currency(value)
        } else {
            mask_salary().to_string()
        }
    };

    SalaryOverview {
        net_salary: amount(salary.map_or(&zero, |s| &s.net_salary)),
        gross_salary: amount(salary.map_or(&zero, |s| &s.gross_salary)),
        ytd_earnings: amount(&ytd_earnings),
        ytd_deductions: amount(&ytd_deductions),
        bank_account: salary.map(|s| mask_bank_account(&s.bank_account)),
    }
}

fn line(label: &str, amount: &BigDecimal) -> String {
    format!("{:<21}{}", format!("{}:", label), format_currency(amount))
}

/// Plain-text payslip for the current salary structure.
pub fn render_payslip(
    user: &User,
    data: &DataStore,
    salary: &SalaryStructure,
    today: NaiveDate,
) -> String {
    let job = data.job_details(&user.id);
    let department = job.map(|j| j.department.as_str()).unwrap_or("N/A");
    let position = job.map(|j| j.position.as_str()).unwrap_or("N/A");
    let rule = "--------------------------------";
    let double_rule = "================================";
    let allowances = &salary.allowances;
    let deductions = &salary.deductions;
    let total_deductions = &deductions.pf + &deductions.professional_tax;

    [
        format!("PAYSLIP - {}", period_label(today).to_uppercase()),
        double_rule.to_string(),
        String::new(),
        format!("Employee: {}", user.full_name),
        format!("Employee ID: {}", user.employee_id),
        format!("Department: {}", department),
        format!("Position: {}", position),
        String::new(),
        "EARNINGS".to_string(),
        rule.to_string(),
        line("Basic Salary", &salary.basic_salary),
        line("HRA", &allowances.hra),
        line("Standard Allowance", &allowances.standard_allowance),
        line("Performance Bonus", &allowances.performance_bonus),
        line("LTA", &allowances.leave_travel_allowance),
        line("Fixed Allowance", &allowances.fixed_allowance),
        rule.to_string(),
        line("Gross Salary", &salary.gross_salary),
        String::new(),
        "DEDUCTIONS".to_string(),
        rule.to_string(),
        line("PF (Employee)", &deductions.pf),
        line("Professional Tax", &deductions.professional_tax),
        rule.to_string(),
        line("Total Deductions", &total_deductions),
        String::new(),
        double_rule.to_string(),
        line("NET SALARY", &salary.net_salary),
        double_rule.to_string(),
        String::new(),
        format!("Generated on: {}", today.format("%d/%m/%Y")),
    ]
    .join("\n")
}

/// File name and body of a downloadable payslip.
pub async fn download_payslip(
    store: &Store,
    user_id: &str,
    today: NaiveDate,
) -> Result<(String, String), AppError> {
    let data = store.data().await;
    let user = data
        .find_user(user_id)
        .ok_or_else(|| AppError::not_found("Employee", user_id))?;
    let salary = data.salary_structure(user_id).ok_or_else(|| {
        AppError::BadRequest("No salary data available for this employee".to_string())
    })?;

    let file_name = format!(
        "payslip_{}_{}.txt",
        user.employee_id,
        period_label(today).replace(' ', "_")
    );
    Ok((file_name, render_payslip(user, &data, salary, today)))
}
