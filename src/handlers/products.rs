use http::StatusCode;

use crate::{
    database::{CatalogSession, Connector},
    error::Result,
    gateway::{GatewayRequest, GatewayResponse},
    models::{CreateProductRequest, DeleteProductRequest, Product, UpdateProductRequest},
};

const NOT_FOUND: &str = "Product not found";

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
    tracing::debug!("products {}", method);

    match method {
        "GET" => list(session).await,
        "POST" => create(session, request).await,
        "PUT" => update(session, request).await,
        "DELETE" => delete(session, request).await,
        other => {
            tracing::warn!("products: method {} not allowed", other);
            Ok(GatewayResponse::method_not_allowed())
        }
    }
}

async fn list(session: &mut dyn CatalogSession) -> Result<GatewayResponse> {
    let products: Vec<Product> = session
        .list_products()
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    GatewayResponse::json(StatusCode::OK, &products)
}

async fn create(
    session: &mut dyn CatalogSession,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let payload: CreateProductRequest = request.json_body()?;
    let product = Product::from(session.insert_product(&payload).await?);

    tracing::info!("Created product {}", product.id);

    GatewayResponse::json(StatusCode::CREATED, &product)
}

async fn update(
    session: &mut dyn CatalogSession,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let payload: UpdateProductRequest = request.json_body()?;

    match session.update_product(&payload).await? {
        Some(row) => GatewayResponse::json(StatusCode::OK, &Product::from(row)),
        None => {
            tracing::warn!("Product {:?} not found for update", payload.id);
            Ok(GatewayResponse::error(StatusCode::NOT_FOUND, NOT_FOUND))
        }
    }
}

async fn delete(
    session: &mut dyn CatalogSession,
    request: &GatewayRequest,
) -> Result<GatewayResponse> {
    let payload: DeleteProductRequest = request.json_body()?;

    match session.delete_product(payload.id.as_ref()).await? {
        Some(id) => {
            tracing::info!("Deleted product {}", id);
            Ok(GatewayResponse::message(
                StatusCode::OK,
                "Product deleted successfully",
            ))
        }
        None => {
            tracing::warn!("Product {:?} not found for delete", payload.id);
            Ok(GatewayResponse::error(StatusCode::NOT_FOUND, NOT_FOUND))
        }
    }
}
