use serde::{Deserialize, Serialize};

use super::Timestamp;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: String,
    pub name: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// Body of both store POST and store PUT; the PUT target comes from the
/// query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreRequest {
    pub name: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
}

impl StoreRequest {
    pub fn address_or_default(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<String>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Store {
            id: row.id,
            name: row.name,
            district: row.district,
            address: row.address,
            created_at: row.created_at.as_ref().map(Timestamp::to_iso),
        }
    }
}
