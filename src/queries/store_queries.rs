use sqlx::PgConnection;

use crate::{
    error::Result,
    models::{KeyType, RecordId, StoreRequest, StoreRow},
};

const COLUMNS: &str = "id::text AS id, name, district, address, created_at";

pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<StoreRow>> {
    let sql = format!("SELECT {} FROM stores ORDER BY district, name", COLUMNS);

    let stores = sqlx::query_as::<_, StoreRow>(&sql)
        .fetch_all(conn)
        .await?;

    Ok(stores)
}

pub async fn create(conn: &mut PgConnection, req: &StoreRequest) -> Result<StoreRow> {
    let sql = format!(
        r#"
        INSERT INTO stores (name, district, address)
        VALUES ($1, $2, $3)
        RETURNING {}
        "#,
        COLUMNS
    );

    let store = sqlx::query_as::<_, StoreRow>(&sql)
        .bind(&req.name)
        .bind(&req.district)
        .bind(req.address_or_default())
        .fetch_one(conn)
        .await?;

    Ok(store)
}

pub async fn update(
    conn: &mut PgConnection,
    key_type: KeyType,
    id: Option<&RecordId>,
    req: &StoreRequest,
) -> Result<Option<StoreRow>> {
    let Some(id) = id.filter(|id| key_type.accepts(id)) else {
        return Ok(None);
    };

    let sql = format!(
        r#"
        UPDATE stores
        SET name = $1, district = $2, address = $3
        WHERE id = {}
        RETURNING {}
        "#,
        key_type.placeholder(4),
        COLUMNS
    );

    let store = sqlx::query_as::<_, StoreRow>(&sql)
        .bind(&req.name)
        .bind(&req.district)
        .bind(req.address_or_default())
        .bind(id.as_str())
        .fetch_optional(conn)
        .await?;

    Ok(store)
}
