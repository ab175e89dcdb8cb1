use serde::Serialize;

use crate::database::Store;
use crate::database::models::Notification;
use crate::error::AppError;
use crate::services::user_context::UserContext;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    pub unread_count: usize,
    pub notifications: Vec<Notification>,
}

/// Newest first.
pub async fn feed(store: &Store, user_id: &str) -> NotificationFeed {
    let data = store.data().await;
    let notifications: Vec<Notification> = data.notifications_for(user_id).cloned().collect();
    NotificationFeed {
        unread_count: notifications.iter().filter(|n| !n.is_read).count(),
        notifications,
    }
}

/// Idempotent: marking an already-read notification succeeds again.
pub async fn mark_read(
    store: &Store,
    ctx: &UserContext,
    notification_id: &str,
) -> Result<Notification, AppError> {
    let owner = store
        .data()
        .await
        .notifications
        .iter()
        .find(|n| n.id == notification_id)
        .map(|n| n.user_id.clone())
        .ok_or_else(|| AppError::not_found("Notification", notification_id))?;
    ctx.requires_access_to(&owner)?;

    store
        .mutate_data(|data| data.mark_notification_read(notification_id).cloned())
        .await
        .ok_or_else(|| AppError::not_found("Notification", notification_id))
}

pub async fn mark_all_read(store: &Store, user_id: &str) -> usize {
    let changed = store
        .mutate_data(|data| data.mark_all_notifications_read_for(user_id))
        .await;
    log::debug!("Marked {} notifications read for user {}", changed, user_id);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::sample_data;
    use crate::database::storage::Storage;
    use crate::database::stores::AuthStore;
    use chrono::Utc;

    async fn setup(user_id: &str) -> (Store, UserContext) {
        let store = Store::new(
            Storage::memory(),
            AuthStore::new(),
            sample_data(Utc::now().date_naive()),
        );
        let user = store.data().await.find_user(user_id).cloned().unwrap();
        (store, UserContext { user })
    }

    #[tokio::test]
    async fn test_feed_counts_unread() {
        let (store, _) = setup("1").await;
        let feed = feed(&store, "1").await;
        assert_eq!(feed.notifications.len(), 3);
        assert_eq!(feed.unread_count, 2);
    }

    #[tokio::test]
    async fn test_mark_read_twice() {
        let (store, ctx) = setup("1").await;
        assert!(mark_read(&store, &ctx, "1").await.unwrap().is_read);
        assert!(mark_read(&store, &ctx, "1").await.unwrap().is_read);
        assert_eq!(super::feed(&store, "1").await.unread_count, 1);
    }

    #[tokio::test]
    async fn test_mark_read_of_someone_else() {
        let (store, ctx) = setup("4").await;
        assert!(matches!(
            mark_read(&store, &ctx, "1").await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            mark_read(&store, &ctx, "missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_mark_all_read_is_scoped() {
        let (store, _) = setup("1").await;
        store
            .mutate_data(|data| {
                data.add_notification(crate::database::models::NewNotification::unread(
                    "4",
                    crate::database::models::NotificationType::Announcement,
                    "Hello",
                    "World",
                ));
            })
            .await;

        assert_eq!(mark_all_read(&store, "1").await, 2);
        assert_eq!(super::feed(&store, "1").await.unread_count, 0);
        assert_eq!(super::feed(&store, "4").await.unread_count, 1);
    }
}
