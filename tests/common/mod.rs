// Shared test doubles for the handler and router tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use ops_catalog::{
    database::{CatalogSession, Connector},
    error::{AppError, Result},
    gateway::GatewayResponse,
    models::{
        CreateProductRequest, ProductRow, RecordId, StoreRequest, StoreRow, Timestamp,
        UpdateProductRequest,
    },
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

#[derive(Debug, Default)]
pub struct MemoryDb {
    pub products: Vec<ProductRow>,
    pub stores: Vec<StoreRow>,
    next_id: u64,
}

impl MemoryDb {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

/// In-memory stand-in for PostgreSQL that also counts session lifecycles.
#[derive(Clone, Default)]
pub struct MemoryConnector {
    pub db: Arc<Mutex<MemoryDb>>,
    pub opened: Arc<AtomicUsize>,
    pub closed: Arc<AtomicUsize>,
    pub fail_queries: bool,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every statement fails with a database error, as a dropped link would.
    pub fn failing_queries() -> Self {
        Self {
            fail_queries: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn product_count(&self) -> usize {
        self.db.lock().unwrap().products.len()
    }

    pub fn store_ids(&self) -> Vec<String> {
        self.db.lock().unwrap().stores.iter().map(|s| s.id.clone()).collect()
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    async fn open(&self) -> Result<Box<dyn CatalogSession>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemorySession {
            db: Arc::clone(&self.db),
            closed: Arc::clone(&self.closed),
            fail_queries: self.fail_queries,
        }))
    }
}

pub struct MemorySession {
    db: Arc<Mutex<MemoryDb>>,
    closed: Arc<AtomicUsize>,
    fail_queries: bool,
}

impl MemorySession {
    fn check(&self) -> Result<()> {
        if self.fail_queries {
            return Err(AppError::DatabaseError(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

pub fn created_at() -> Option<Timestamp> {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .map(Timestamp::Naive)
}

// Approximates PostgreSQL's ascending ORDER BY: NULLs last, then byte
// order. Collation-sensitive text can sort differently in a real database,
// so fixtures here stick to plain ASCII; `pg_catalog_tests` checks the real
// ordering.
fn sort_key(primary: &Option<String>, secondary: &Option<String>) -> (bool, String, bool, String) {
    (
        primary.is_none(),
        primary.clone().unwrap_or_default(),
        secondary.is_none(),
        secondary.clone().unwrap_or_default(),
    )
}

#[async_trait]
impl CatalogSession for MemorySession {
    async fn list_products(&mut self) -> Result<Vec<ProductRow>> {
        self.check()?;
        let mut rows = self.db.lock().unwrap().products.clone();
        rows.sort_by_key(|p| sort_key(&p.category, &p.name));
        Ok(rows)
    }

    async fn insert_product(&mut self, req: &CreateProductRequest) -> Result<ProductRow> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let row = ProductRow {
            id: db.next_id(),
            name: req.name.clone(),
            category: req.category.clone(),
            min_price: req.min_price,
            max_price: req.max_price,
            photo_required: Some(req.photo_required_or_default()),
            created_at: created_at(),
        };
        db.products.push(row.clone());
        Ok(row)
    }

    async fn update_product(&mut self, req: &UpdateProductRequest) -> Result<Option<ProductRow>> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let Some(id) = req.id.as_ref() else {
            return Ok(None);
        };
        Ok(db
            .products
            .iter_mut()
            .find(|p| p.id == id.as_str())
            .map(|row| {
                row.name = req.name.clone();
                row.category = req.category.clone();
                row.min_price = req.min_price;
                row.max_price = req.max_price;
                row.photo_required = req.photo_required;
                row.clone()
            }))
    }

    async fn delete_product(&mut self, id: Option<&RecordId>) -> Result<Option<RecordId>> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let Some(id) = id else {
            return Ok(None);
        };
        let position = db.products.iter().position(|p| p.id == id.as_str());
        Ok(position.map(|index| RecordId::from(db.products.remove(index).id)))
    }

    async fn list_stores(&mut self) -> Result<Vec<StoreRow>> {
        self.check()?;
        let mut rows = self.db.lock().unwrap().stores.clone();
        rows.sort_by_key(|s| sort_key(&s.district, &s.name));
        Ok(rows)
    }

    async fn insert_store(&mut self, req: &StoreRequest) -> Result<StoreRow> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let row = StoreRow {
            id: db.next_id(),
            name: req.name.clone(),
            district: req.district.clone(),
            address: Some(req.address_or_default().to_string()),
            created_at: created_at(),
        };
        db.stores.push(row.clone());
        Ok(row)
    }

    async fn update_store(
        &mut self,
        id: Option<&RecordId>,
        req: &StoreRequest,
    ) -> Result<Option<StoreRow>> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(db
            .stores
            .iter_mut()
            .find(|s| s.id == id.as_str())
            .map(|row| {
                row.name = req.name.clone();
                row.district = req.district.clone();
                row.address = Some(req.address_or_default().to_string());
                row.clone()
            }))
    }

    async fn ping(&mut self) -> Result<()> {
        self.check()
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A connector that must never be reached.
#[derive(Clone, Default)]
pub struct UnreachableConnector {
    pub attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl Connector for UnreachableConnector {
    async fn open(&self) -> Result<Box<dyn CatalogSession>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::InternalError(
            "database should not be opened".to_string(),
        ))
    }
}

pub fn json_body(response: &GatewayResponse) -> serde_json::Value {
    serde_json::from_str(&response.body).expect("response body is JSON")
}
