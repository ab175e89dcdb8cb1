use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: String,
    pub marital_status: MaritalStatus,
    pub nationality: Option<String>,
    pub phone: String,
    pub personal_email: String,
    pub current_address: String,
    pub permanent_address: String,
    pub emergency_contact: EmergencyContact,
    pub bank_details: Option<BankDetails>,
    pub pan_number: Option<String>,
    pub uan_number: Option<String>,
    pub emp_code: Option<String>,
    pub about: Option<String>,
    pub what_i_love_about_job: Option<String>,
    pub interests_and_hobbies: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum MaritalStatus {
        Single => "single",
        Married => "married",
        Divorced => "divorced",
        Widowed => "widowed",
    }
}

impl Profile {
    /// Blank profile seeded for a newly added user.
    pub fn new_default(user_id: &str, personal_email: &str, phone: Option<String>) -> Self {
        Self {
            user_id: user_id.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            gender: Gender::Male,
            blood_group: "O+".to_string(),
            marital_status: MaritalStatus::Single,
            nationality: None,
            phone: phone.unwrap_or_default(),
            personal_email: personal_email.to_string(),
            current_address: String::new(),
            permanent_address: String::new(),
            emergency_contact: EmergencyContact::default(),
            bank_details: None,
            pan_number: None,
            uan_number: None,
            emp_code: None,
            about: None,
            what_i_love_about_job: None,
            interests_and_hobbies: None,
            skills: Vec::new(),
            certifications: Vec::new(),
        }
    }
}

/// Partial profile. Every field that is `Some` replaces the stored value wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub blood_group: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub nationality: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub bank_details: Option<BankDetails>,
    pub pan_number: Option<String>,
    pub uan_number: Option<String>,
    pub emp_code: Option<String>,
    pub about: Option<String>,
    pub what_i_love_about_job: Option<String>,
    pub interests_and_hobbies: Option<String>,
    pub skills: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
}

macro_rules! merge {
    ($update:ident, $target:ident, $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $target.$field = value;
            }
        )*
    };
}

macro_rules! merge_optional {
    ($update:ident, $target:ident, $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $target.$field = Some(value);
            }
        )*
    };
}

impl ProfileUpdate {
    pub fn apply_to(self, profile: &mut Profile) {
        let update = self;
        merge!(
            update,
            profile,
            date_of_birth,
            gender,
            blood_group,
            marital_status,
            phone,
            personal_email,
            current_address,
            permanent_address,
            emergency_contact,
            skills,
            certifications,
        );
        merge_optional!(
            update,
            profile,
            nationality,
            bank_details,
            pan_number,
            uan_number,
            emp_code,
            about,
            what_i_love_about_job,
            interests_and_hobbies,
        );
    }
}
