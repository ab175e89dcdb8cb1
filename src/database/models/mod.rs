pub mod attendance;
pub mod job;
pub mod leave;
pub(crate) mod macros;
pub mod notification;
pub mod payslip;
pub mod profile;
pub mod salary;
pub mod stats;
pub mod user;

// Re-export all models for easy importing
pub use attendance::*;
pub use job::*;
pub use leave::*;
pub use notification::*;
pub use payslip::*;
pub use profile::*;
pub use salary::*;
pub use stats::*;
pub use user::*;
