use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    database::{Connector, PgConnector},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connector>,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }
}

pub fn build(config: &AppConfig) -> Router {
    let connector = PgConnector::new(&config.database);
    router(AppState::new(Arc::new(connector)), config.server.max_body_size)
}

/// Assembles the router around an arbitrary connector.
pub fn router(state: AppState, max_body_size: usize) -> Router {
    routes::create_router()
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
