use serde::{Deserialize, Serialize};

use crate::database::models::{User, UserUpdate};

/// Tracks who is signed in. Persisted under the `auth-storage` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthStore {
    user: Option<User>,
    is_authenticated: bool,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current identity unconditionally. Credentials are never checked here.
    pub fn login(&mut self, user: User) {
        log::info!("User {} ({}) signed in", user.id, user.email);
        self.user = Some(user);
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            log::info!("User {} signed out", user.id);
        }
        self.user = None;
        self.is_authenticated = false;
    }

    /// Shallow-merges into the current identity; no-op when nobody is signed in.
    pub fn update_user(&mut self, updates: UserUpdate) -> Option<&User> {
        let user = self.user.as_mut()?;
        updates.apply_to(user);
        Some(&*user)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{UserRole, UserStatus};
    use chrono::Utc;

    fn user() -> User {
        User {
            id: "1".to_string(),
            employee_id: "EMP001".to_string(),
            email: "rahul.sharma@dayflow.com".to_string(),
            full_name: "Rahul Sharma".to_string(),
            role: UserRole::Employee,
            status: UserStatus::Active,
            profile_picture: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_login_and_logout() {
        let mut auth = AuthStore::new();
        assert!(!auth.is_authenticated());

        auth.login(user());
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().map(|u| u.id.as_str()), Some("1"));

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_login_replaces_identity() {
        let mut auth = AuthStore::new();
        auth.login(user());

        let mut other = user();
        other.id = "2".to_string();
        auth.login(other);

        assert_eq!(auth.current_user().map(|u| u.id.as_str()), Some("2"));
    }

    #[test]
    fn test_update_user_merges_fields() {
        let mut auth = AuthStore::new();
        auth.login(user());

        let updated = auth
            .update_user(UserUpdate {
                full_name: Some("Rahul S.".to_string()),
                ..Default::default()
            })
            .cloned()
            .unwrap();

        assert_eq!(updated.full_name, "Rahul S.");
        assert_eq!(updated.email, "rahul.sharma@dayflow.com");
    }

    #[test]
    fn test_update_user_without_identity_is_noop() {
        let mut auth = AuthStore::new();
        let result = auth.update_user(UserUpdate {
            full_name: Some("Nobody".to_string()),
            ..Default::default()
        });
        assert!(result.is_none());
        assert!(!auth.is_authenticated());
    }
}
