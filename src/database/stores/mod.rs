pub mod auth;
pub mod data;

pub use auth::AuthStore;
pub use data::{DataStore, generate_id};
