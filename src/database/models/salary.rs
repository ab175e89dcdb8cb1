use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Live compensation configuration for one user.
///
/// Gross and net totals are supplied pre-computed; nothing here recomputes them
/// from the allowance and deduction components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStructure {
    pub user_id: String,
    pub monthly_wage: BigDecimal,
    pub yearly_wage: BigDecimal,
    pub working_days_per_week: Option<u8>,
    pub break_time_hours: Option<f64>,
    pub basic_salary: BigDecimal,
    pub basic_percent: f64,
    pub allowances: Allowances,
    pub deductions: Deductions,
    pub gross_salary: BigDecimal,
    pub net_salary: BigDecimal,
    pub bank_account: String,
    pub effective_from: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allowances {
    pub hra: BigDecimal,
    pub hra_percent: f64,
    pub da: BigDecimal,
    pub da_percent: Option<f64>,
    pub standard_allowance: BigDecimal,
    pub standard_percent: f64,
    pub performance_bonus: BigDecimal,
    pub performance_percent: f64,
    pub leave_travel_allowance: BigDecimal,
    pub lta_percent: f64,
    pub fixed_allowance: BigDecimal,
    pub fixed_percent: f64,
    pub transport: BigDecimal,
    pub special: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    pub pf: BigDecimal,
    pub pf_percent: f64,
    pub employer_pf: BigDecimal,
    pub employer_pf_percent: f64,
    pub tax: BigDecimal,
    pub professional_tax: BigDecimal,
}
