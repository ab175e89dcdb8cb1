pub mod attendance;
pub mod auth;
pub mod employees;
pub mod leave;
pub mod notifications;
pub mod payroll;
pub mod profiles;
pub mod reports;
pub mod stats;
pub mod user_context;

pub use user_context::UserContext;
