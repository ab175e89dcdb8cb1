pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::Config;
pub use database::Store;
pub use error::AppError;

pub struct AppState {
    pub config: Config,
    pub store: Store,
}
