use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Historical per-period snapshot. Independent of the live `SalaryStructure`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: String,
    pub user_id: String,
    pub month: String,
    pub year: i32,
    pub earnings: PayslipEarnings,
    pub deductions: PayslipDeductions,
    pub gross_salary: BigDecimal,
    pub net_salary: BigDecimal,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayslipEarnings {
    pub basic: BigDecimal,
    pub hra: BigDecimal,
    pub da: BigDecimal,
    pub transport: BigDecimal,
    pub special: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayslipDeductions {
    pub pf: BigDecimal,
    pub tax: BigDecimal,
    pub professional_tax: BigDecimal,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum PaymentStatus {
        Pending => "pending",
        Paid => "paid",
    }
}
