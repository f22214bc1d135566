use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};

use super::{RecordId, Timestamp};

// DB models

/// A `products` row as selected by the product queries. Every mutable
/// column is nullable because a full-replace update may write NULLs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub photo_required: Option<bool>,
    pub created_at: Option<Timestamp>,
}

// Request types

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub photo_required: Option<bool>,
}

impl CreateProductRequest {
    pub fn photo_required_or_default(&self) -> bool {
        self.photo_required.unwrap_or(false)
    }
}

/// Full replacement of a product. Omitted fields are written as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub photo_required: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteProductRequest {
    pub id: Option<RecordId>,
}

// Response types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub photo_required: Option<bool>,
    pub created_at: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            category: row.category,
            min_price: row.min_price.and_then(|price| price.to_f64()),
            max_price: row.max_price.and_then(|price| price.to_f64()),
            photo_required: row.photo_required,
            created_at: row.created_at.as_ref().map(Timestamp::to_iso),
        }
    }
}
