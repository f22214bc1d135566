//! Gateway-level entry points, one per catalog.
//!
//! Each handler answers a preflight without touching the database, otherwise
//! opens exactly one session, runs one statement for the verb, and closes the
//! session before returning on every path, including errors.

pub mod products;
pub mod stores;

use crate::{database::CatalogSession, error::Result, gateway::GatewayResponse};

/// Closes the session and then hands back whatever the dispatch produced.
async fn release(
    session: Box<dyn CatalogSession>,
    outcome: Result<GatewayResponse>,
) -> Result<GatewayResponse> {
    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close database session: {}", e);
    }

    outcome
}
