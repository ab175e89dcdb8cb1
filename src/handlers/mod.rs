pub mod attendance;
pub mod auth;
pub mod employees;
pub mod leave;
pub mod notifications;
pub mod payroll;
pub mod profiles;
pub mod shared;
pub mod stats;
