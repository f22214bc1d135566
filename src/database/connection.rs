use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

use super::{CatalogSession, Connector};
use crate::{
    config::DatabaseConfig,
    error::Result,
    models::{
        CreateProductRequest, KeyType, ProductRow, RecordId, StoreRequest, StoreRow,
        UpdateProductRequest,
    },
    queries::{product_queries, store_queries},
};

/// Connects to PostgreSQL afresh for every invocation; nothing is pooled.
#[derive(Debug, Clone)]
pub struct PgConnector {
    url: String,
    key_type: KeyType,
}

impl PgConnector {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            key_type: config.key_type,
        }
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn open(&self) -> Result<Box<dyn CatalogSession>> {
        let conn = PgConnection::connect(&self.url).await?;
        tracing::debug!("Database connection opened");

        Ok(Box::new(PgSession {
            conn,
            key_type: self.key_type,
        }))
    }
}

struct PgSession {
    conn: PgConnection,
    key_type: KeyType,
}

#[async_trait]
impl CatalogSession for PgSession {
    async fn list_products(&mut self) -> Result<Vec<ProductRow>> {
        product_queries::list_all(&mut self.conn).await
    }

    async fn insert_product(&mut self, req: &CreateProductRequest) -> Result<ProductRow> {
        product_queries::create(&mut self.conn, req).await
    }

    async fn update_product(&mut self, req: &UpdateProductRequest) -> Result<Option<ProductRow>> {
        product_queries::update(&mut self.conn, self.key_type, req).await
    }

    async fn delete_product(&mut self, id: Option<&RecordId>) -> Result<Option<RecordId>> {
        product_queries::delete(&mut self.conn, self.key_type, id).await
    }

    async fn list_stores(&mut self) -> Result<Vec<StoreRow>> {
        store_queries::list_all(&mut self.conn).await
    }

    async fn insert_store(&mut self, req: &StoreRequest) -> Result<StoreRow> {
        store_queries::create(&mut self.conn, req).await
    }

    async fn update_store(
        &mut self,
        id: Option<&RecordId>,
        req: &StoreRequest,
    ) -> Result<Option<StoreRow>> {
        store_queries::update(&mut self.conn, self.key_type, id, req).await
    }

    async fn ping(&mut self) -> Result<()> {
        self.conn.ping().await?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().await?;
        tracing::debug!("Database connection closed");
        Ok(())
    }
}

/// Opens a session, checks it answers, and releases it again.
pub async fn check_health(connector: &dyn Connector) -> Result<()> {
    let mut session = connector.open().await?;
    let outcome = session.ping().await;
    let closed = session.close().await;
    outcome?;
    closed
}
