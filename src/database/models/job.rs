use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub user_id: String,
    pub department: String,
    pub position: String,
    pub date_of_joining: NaiveDate,
    pub employment_type: EmploymentType,
    /// Free text, not a user reference.
    pub reporting_manager: String,
    pub work_location: String,
    pub shift_timings: String,
    pub company: Option<String>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum EmploymentType {
        #[default]
        FullTime => "full-time",
        PartTime => "part-time",
        Contract => "contract",
        Intern => "intern",
    }
}

pub const DEFAULT_WORK_LOCATION: &str = "Bangalore Office";
pub const DEFAULT_SHIFT_TIMINGS: &str = "9:00 AM - 6:00 PM";

impl JobDetails {
    pub fn new_default(
        user_id: &str,
        department: Option<String>,
        position: Option<String>,
        date_of_joining: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            department: department.unwrap_or_default(),
            position: position.unwrap_or_default(),
            date_of_joining,
            employment_type: EmploymentType::FullTime,
            reporting_manager: String::new(),
            work_location: DEFAULT_WORK_LOCATION.to_string(),
            shift_timings: DEFAULT_SHIFT_TIMINGS.to_string(),
            company: None,
        }
    }
}
