pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod routes;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
