use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub employee_id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum UserRole {
        #[default]
        Employee => "employee",
        Hr => "hr",
        Admin => "admin",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    pub enum UserStatus {
        #[default]
        Active => "active",
        Inactive => "inactive",
        OnLeave => "on_leave",
        OnNotice => "on-notice",
    }
}

impl UserRole {
    /// HR staff and admins share the admin portal.
    pub fn is_hr_or_admin(&self) -> bool {
        matches!(self, UserRole::Hr | UserRole::Admin)
    }
}

/// Partial user fields, shallow-merged into an existing identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub profile_picture: Option<String>,
}

impl UserUpdate {
    pub fn apply_to(self, user: &mut User) {
        if let Some(employee_id) = self.employee_id {
            user.employee_id = employee_id;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
        if let Some(profile_picture) = self.profile_picture {
            user.profile_picture = Some(profile_picture);
        }
    }
}

/// Optional job information supplied when a user is added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
}
