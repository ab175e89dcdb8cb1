//! Formatting, date arithmetic and input heuristics shared by services and handlers.

use std::sync::LazyLock;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[!@#$%^&*]").unwrap());

const MIN_PASSWORD_LEN: usize = 8;
const STRONG_PASSWORD_LEN: usize = 12;

/// Whole rupees with Indian digit grouping, e.g. `₹1,35,000`.
pub fn format_currency(amount: &BigDecimal) -> String {
    let rupees = amount
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i128()
        .unwrap_or_default();
    let sign = if rupees < 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&rupees.unsigned_abs().to_string()))
}

/// Last three digits, then pairs: 12345678 -> 1,23,45,678.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// 12-hour clock, e.g. `9:30 AM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Decimal hours as `HH:MM`. Minutes that round up to 60 carry into the hour.
pub fn format_hours(hours: Option<f64>) -> String {
    let Some(hours) = hours else {
        return "-".to_string();
    };

    let mut whole = hours.floor() as i64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }
    format!("{:02}:{:02}", whole, minutes)
}

/// Calendar days covered by an inclusive range, in either order.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// `month` is 1-based.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from((next - first).num_days()).ok()
}

/// Weekday index of the first of the month, Sunday = 0.
pub fn first_day_of_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.weekday().num_days_from_sunday())
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good morning",
        12..17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_password(password: &str) -> PasswordCheck {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("Password must be at least 8 characters".to_string());
    }
    if !UPPER_RE.is_match(password) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !LOWER_RE.is_match(password) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !DIGIT_RE.is_match(password) {
        errors.push("Password must contain at least one number".to_string());
    }
    if !SPECIAL_RE.is_match(password) {
        errors.push("Password must contain at least one special character (!@#$%^&*)".to_string());
    }

    PasswordCheck {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let score = [
        len >= MIN_PASSWORD_LEN,
        len >= STRONG_PASSWORD_LEN,
        UPPER_RE.is_match(password),
        LOWER_RE.is_match(password),
        DIGIT_RE.is_match(password),
        SPECIAL_RE.is_match(password),
    ]
    .into_iter()
    .filter(|passed| *passed)
    .count() as u8;

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3..=4 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };

    PasswordStrength { score, label }
}

pub fn mask_bank_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() <= 4 {
        return account.to_string();
    }
    let last_four: String = chars[chars.len() - 4..].iter().collect();
    format!("XXXX XXXX {}", last_four)
}

pub fn mask_salary() -> &'static str {
    "₹ ****"
}

/// Up to two upper-cased initials.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn prefix(word: &str, pad: bool) -> String {
    let mut prefix: String = word.chars().take(2).flat_map(char::to_uppercase).collect();
    if pad {
        while prefix.chars().count() < 2 {
            prefix.push('X');
        }
    }
    prefix
}

/// Company, first-name and last-name prefixes, then the year and a four-digit serial.
/// A single-word name reuses the first name as the last name.
pub fn generate_employee_id(company: &str, full_name: &str, year: i32, serial: u32) -> String {
    let mut parts = full_name.split(' ');
    let first_name = parts.next().unwrap_or_default();
    let last_name = parts
        .next()
        .filter(|part| !part.is_empty())
        .unwrap_or(first_name);

    format!(
        "{}{}{}{}{:04}",
        prefix(company, false),
        prefix(first_name, true),
        prefix(last_name, true),
        year,
        serial
    )
}
