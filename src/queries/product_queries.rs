use sqlx::PgConnection;

use crate::{
    error::Result,
    models::{CreateProductRequest, KeyType, ProductRow, RecordId, UpdateProductRequest},
};

const COLUMNS: &str = r#"
    id::text AS id, name, category,
    min_price::numeric AS min_price, max_price::numeric AS max_price,
    photo_required, created_at
"#;

pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<ProductRow>> {
    let sql = format!("SELECT {} FROM products ORDER BY category, name", COLUMNS);

    let products = sqlx::query_as::<_, ProductRow>(&sql)
        .fetch_all(conn)
        .await?;

    Ok(products)
}

pub async fn create(conn: &mut PgConnection, req: &CreateProductRequest) -> Result<ProductRow> {
    let sql = format!(
        r#"
        INSERT INTO products (name, category, min_price, max_price, photo_required)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {}
        "#,
        COLUMNS
    );

    let product = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.min_price)
        .bind(req.max_price)
        .bind(req.photo_required_or_default())
        .fetch_one(conn)
        .await?;

    Ok(product)
}

pub async fn update(
    conn: &mut PgConnection,
    key_type: KeyType,
    req: &UpdateProductRequest,
) -> Result<Option<ProductRow>> {
    let Some(id) = req.id.as_ref().filter(|id| key_type.accepts(id)) else {
        return Ok(None);
    };

    let sql = format!(
        r#"
        UPDATE products
        SET
            name = $1,
            category = $2,
            min_price = $3,
            max_price = $4,
            photo_required = $5
        WHERE id = {}
        RETURNING {}
        "#,
        key_type.placeholder(6),
        COLUMNS
    );

    let product = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.min_price)
        .bind(req.max_price)
        .bind(req.photo_required)
        .bind(id.as_str())
        .fetch_optional(conn)
        .await?;

    Ok(product)
}

pub async fn delete(
    conn: &mut PgConnection,
    key_type: KeyType,
    id: Option<&RecordId>,
) -> Result<Option<RecordId>> {
    let Some(id) = id.filter(|id| key_type.accepts(id)) else {
        return Ok(None);
    };

    let sql = format!(
        "DELETE FROM products WHERE id = {} RETURNING id::text",
        key_type.placeholder(1)
    );

    let deleted = sqlx::query_scalar::<_, String>(&sql)
        .bind(id.as_str())
        .fetch_optional(conn)
        .await?;

    Ok(deleted.map(RecordId::from))
}
