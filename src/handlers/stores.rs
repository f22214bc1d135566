use http::StatusCode;

use crate::{
    database::{CatalogSession, Connector},
    error::Result,
    gateway::{GatewayRequest, GatewayResponse},
    models::{RecordId, Store, StoreRequest},
};

pub async fn handle(
    connector: &dyn Connector,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let method = request.method();

    if method == "OPTIONS" {
        return Ok(GatewayResponse::preflight());
    }

    let mut session = connector.open().await?;
    let outcome = dispatch(&mut *session, method, request).await;

    super::release(session, outcome).await
}

async fn dispatch(
    session: &mut dyn CatalogSession,
    method: &str,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    tracing::debug!("stores {}", method);

    // Stores cannot be deleted; DELETE falls through to 405.
    match method {
        "GET" => list(session).await,
        "POST" => create(session, request).await,
        "PUT" => update(session, request).await,
        other => {
            tracing::warn!("stores: method {} not allowed", other);
            Ok(GatewayResponse::method_not_allowed())
        }
    }
}

async fn list(session: &mut dyn CatalogSession) -> Result<GatewayResponse> {
    let stores: Vec<Store> = session
        .list_stores()
        .await?
        .into_iter()
        .map(Store::from)
        .collect();

    GatewayResponse::json(StatusCode::OK, &stores)
}

async fn create(
    session: &mut dyn CatalogSession,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let payload: StoreRequest = request.json_body()?;
    let store = Store::from(session.insert_store(&payload).await?);

    tracing::info!("Created store {}", store.id);

    GatewayResponse::json(StatusCode::CREATED, &store)
}

/// The target id comes from `?id=`; an id in the body is ignored.
async fn update(
    session: &mut dyn CatalogSession,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let id = request.query_param("id").map(RecordId::from);
    let payload: StoreRequest = request.json_body()?;

    match session.update_store(id.as_ref(), &payload).await? {
        Some(row) => GatewayResponse::json(StatusCode::OK, &Store::from(row)),
        None => {
            tracing::warn!("Store {:?} not found for update", id);
            Ok(GatewayResponse::error(StatusCode::NOT_FOUND, "Store not found"))
        }
    }
}
