use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{
    Attendance, AttendanceUpdate, JobDetails, JobInfo, LeaveBalance, LeaveRequest,
    LeaveRequestUpdate, NewAttendance, NewLeaveRequest, NewNotification, Notification, Payslip,
    Profile, ProfileUpdate, SalaryStructure, User,
};

pub const AVATARS: &[&str] = &[
    "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=150&h=150&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
];

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Every business collection. Persisted under the `data-storage` key.
///
/// Mutations never fail: an id that matches nothing is a silent no-op, reported
/// to the caller as `None`. Relationships between collections are by matching
/// id values only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataStore {
    pub users: Vec<User>,
    pub profiles: BTreeMap<String, Profile>,
    pub job_details: BTreeMap<String, JobDetails>,
    pub salary_structures: BTreeMap<String, SalaryStructure>,
    pub leave_requests: Vec<LeaveRequest>,
    pub attendance: Vec<Attendance>,
    pub leave_balances: BTreeMap<String, LeaveBalance>,
    pub payslips: Vec<Payslip>,
    /// Newest first.
    pub notifications: Vec<Notification>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user and seeds its default profile, job details and leave balance.
    /// Duplicate ids or employee ids are not checked.
    pub fn add_user(&mut self, user: User, job_info: Option<JobInfo>) -> &User {
        let mut user = user;
        if user.profile_picture.is_none() {
            user.profile_picture = AVATARS
                .choose(&mut rand::rng())
                .map(|avatar| avatar.to_string());
        }

        let job_info = job_info.unwrap_or_default();
        let today = Utc::now().date_naive();

        self.leave_balances
            .insert(user.id.clone(), LeaveBalance::default());
        self.profiles.insert(
            user.id.clone(),
            Profile::new_default(&user.id, &user.email, job_info.phone),
        );
        self.job_details.insert(
            user.id.clone(),
            JobDetails::new_default(&user.id, job_info.department, job_info.position, today),
        );

        log::debug!("Added user {} ({})", user.id, user.employee_id);
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    /// Shallow-merges into an existing profile. A user without a profile is left untouched.
    pub fn update_profile(&mut self, user_id: &str, updates: ProfileUpdate) -> Option<&Profile> {
        let Some(profile) = self.profiles.get_mut(user_id) else {
            log::warn!("No profile for user {}, update skipped", user_id);
            return None;
        };
        updates.apply_to(profile);
        Some(&*profile)
    }

    pub fn add_leave_request(&mut self, request: NewLeaveRequest) -> &LeaveRequest {
        let request = request.into_request(generate_id(), Utc::now());
        log::debug!(
            "Leave request {} added for user {}",
            request.id,
            request.user_id
        );
        self.leave_requests.push(request);
        &self.leave_requests[self.leave_requests.len() - 1]
    }

    /// Merges by id and stamps `updated_at`.
    pub fn update_leave_request(
        &mut self,
        id: &str,
        updates: LeaveRequestUpdate,
    ) -> Option<&LeaveRequest> {
        let request = self.leave_requests.iter_mut().find(|r| r.id == id)?;
        updates.apply_to(request, Utc::now());
        Some(&*request)
    }

    pub fn add_attendance(&mut self, attendance: NewAttendance) -> &Attendance {
        let attendance = attendance.into_attendance(generate_id());
        self.attendance.push(attendance);
        &self.attendance[self.attendance.len() - 1]
    }

    pub fn update_attendance(&mut self, id: &str, updates: AttendanceUpdate) -> Option<&Attendance> {
        let attendance = self.attendance.iter_mut().find(|a| a.id == id)?;
        updates.apply_to(attendance);
        Some(&*attendance)
    }

    pub fn mark_notification_read(&mut self, id: &str) -> Option<&Notification> {
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        notification.is_read = true;
        Some(&*notification)
    }

    /// Marks every notification of every user as read.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.is_read) {
            notification.is_read = true;
            changed += 1;
        }
        changed
    }

    pub fn mark_all_notifications_read_for(&mut self, user_id: &str) -> usize {
        let mut changed = 0;
        for notification in self
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            notification.is_read = true;
            changed += 1;
        }
        changed
    }

    /// Prepends, so the collection stays newest first.
    pub fn add_notification(&mut self, notification: NewNotification) -> &Notification {
        let notification = notification.into_notification(generate_id(), Utc::now());
        self.notifications.insert(0, notification);
        &self.notifications[0]
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Matches an email or an employee id, ignoring case.
    pub fn find_user_by_login(&self, login_id: &str) -> Option<&User> {
        let login_id = login_id.trim().to_lowercase();
        self.users.iter().find(|u| {
            u.email.to_lowercase() == login_id || u.employee_id.to_lowercase() == login_id
        })
    }

    pub fn profile(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.get(user_id)
    }

    pub fn job_details(&self, user_id: &str) -> Option<&JobDetails> {
        self.job_details.get(user_id)
    }

    pub fn salary_structure(&self, user_id: &str) -> Option<&SalaryStructure> {
        self.salary_structures.get(user_id)
    }

    pub fn leave_balance(&self, user_id: &str) -> Option<&LeaveBalance> {
        self.leave_balances.get(user_id)
    }

    pub fn find_leave_request(&self, id: &str) -> Option<&LeaveRequest> {
        self.leave_requests.iter().find(|r| r.id == id)
    }

    pub fn leave_requests_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a LeaveRequest> + 'a {
        self.leave_requests.iter().filter(move |r| r.user_id == user_id)
    }

    pub fn attendance_for(&self, user_id: &str, date: NaiveDate) -> Option<&Attendance> {
        self.attendance
            .iter()
            .find(|a| a.user_id == user_id && a.date == date)
    }

    pub fn notifications_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a Notification> + 'a {
        self.notifications
            .iter()
            .filter(move |n| n.user_id == user_id)
    }

    pub fn payslips_for<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Payslip> + 'a {
        self.payslips.iter().filter(move |p| p.user_id == user_id)
    }
}
