mod catalog;
mod health;

use axum::{
    routing::{any, get},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", any(catalog::products))
        .route("/stores", any(catalog::stores))
}
