use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;

use crate::AppState;
use crate::database::Store;
use crate::database::models::{User, UserRole};
use crate::error::AppError;

/// The signed-in user, taken from the auth store.
///
/// Role checks here are advisory: they mirror which screens each role could
/// open and answer with 403, nothing more.
#[derive(Debug, Clone, Serialize)]
pub struct UserContext {
    pub user: User,
}

impl UserContext {
    pub async fn from_store(store: &Store) -> Result<Self, AppError> {
        let auth = store.auth().await;
        match (auth.is_authenticated(), auth.current_user()) {
            (true, Some(user)) => Ok(Self { user: user.clone() }),
            _ => Err(AppError::Unauthorized),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn is_hr_or_admin(&self) -> bool {
        self.role().is_hr_or_admin()
    }

    /// Employees only see their own records; HR and admins see everyone's.
    pub fn can_access_user_resource(&self, owner_id: &str) -> bool {
        self.user_id() == owner_id || self.is_hr_or_admin()
    }

    pub fn requires_hr_or_admin(&self) -> Result<(), AppError> {
        if self.is_hr_or_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "HR or admin access required".to_string(),
            ))
        }
    }

    pub fn requires_access_to(&self, owner_id: &str) -> Result<(), AppError> {
        if self.can_access_user_resource(owner_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Cannot access another employee's records".to_string(),
            ))
        }
    }
}

impl FromRequest for UserContext {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::internal_server_error_message("Application state not configured")
            })?;
            UserContext::from_store(&state.store).await
        })
    }
}
