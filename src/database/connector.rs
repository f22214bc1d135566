use async_trait::async_trait;

use crate::{
    error::Result,
    models::{
        CreateProductRequest, ProductRow, RecordId, StoreRequest, StoreRow, UpdateProductRequest,
    },
};

/// Opens one database session per handler invocation.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(&self) -> Result<Box<dyn CatalogSession>>;
}

/// A single open connection. Each write is one statement that commits on its
/// own; callers must hand the session back through [`CatalogSession::close`].
#[async_trait]
pub trait CatalogSession: Send {
    async fn list_products(&mut self) -> Result<Vec<ProductRow>>;

    async fn insert_product(&mut self, req: &CreateProductRequest) -> Result<ProductRow>;

    /// Returns `None` when no row matches `req.id`.
    async fn update_product(&mut self, req: &UpdateProductRequest) -> Result<Option<ProductRow>>;

    /// Returns the deleted id, or `None` when no row matched.
    async fn delete_product(&mut self, id: Option<&RecordId>) -> Result<Option<RecordId>>;

    async fn list_stores(&mut self) -> Result<Vec<StoreRow>>;

    async fn insert_store(&mut self, req: &StoreRequest) -> Result<StoreRow>;

    async fn update_store(
        &mut self,
        id: Option<&RecordId>,
        req: &StoreRequest,
    ) -> Result<Option<StoreRow>>;

    async fn ping(&mut self) -> Result<()>;

    async fn close(self: Box<Self>) -> Result<()>;
}
