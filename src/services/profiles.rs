use crate::database::Store;
use crate::database::models::{Profile, ProfileUpdate, User, UserUpdate};
use crate::error::AppError;

pub async fn get_profile(store: &Store, user_id: &str) -> Result<Profile, AppError> {
    store
        .data()
        .await
        .profile(user_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Profile", user_id))
}

/// Merges the given fields into an existing profile. Profiles are only ever
/// created alongside their user, so a missing one is reported as not found.
pub async fn update_profile(
    store: &Store,
    user_id: &str,
    updates: ProfileUpdate,
) -> Result<Profile, AppError> {
    store
        .mutate_data(|data| data.update_profile(user_id, updates).cloned())
        .await
        .ok_or_else(|| AppError::not_found("Profile", user_id))
}

/// Updates the signed-in identity only; the directory entry keeps its values.
pub async fn update_current_user(store: &Store, updates: UserUpdate) -> Result<User, AppError> {
    store
        .mutate_auth(|auth| auth.update_user(updates).cloned())
        .await
        .ok_or(AppError::Unauthorized)
}
