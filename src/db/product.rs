use crate::models;
use sqlx::{PgConnection, PgPool};
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM products ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            err.to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<models::Product>, String> {
    tracing::info!("Fetch product {}", id);
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM products WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product, error: {:?}", err);
            err.to_string()
        })
}

pub async fn insert(
    conn: &mut PgConnection,
    product: models::Product,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products (
        title,
        "desc",
        status,
        "date",
        category,
        created_at,
        updated_at
        )
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&product.title)
    .bind(&product.desc)
    .bind(product.status.as_str())
    .bind(product.date)
    .bind(&product.category)
    .fetch_one(conn)
    .instrument(query_span)
    .await
    .map(|product| {
        tracing::info!("New product {} has been saved", product.id);
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

/// Writes all business fields of `product` back and refreshes `updated_at`.
/// `None` when the row is gone.
pub async fn update(
    conn: &mut PgConnection,
    product: models::Product,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET
            title=$2,
            "desc"=$3,
            status=$4,
            "date"=$5,
            category=$6,
            updated_at=NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(&product.title)
    .bind(&product.desc)
    .bind(product.status.as_str())
    .bind(product.date)
    .bind(&product.category)
    .fetch_optional(conn)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err.to_string()
    })
}

#[tracing::instrument(name = "Delete product.", skip(conn))]
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<bool, String> {
    tracing::info!("Delete product {}", id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM products WHERE id = $1;")
        .bind(id)
        .execute(conn)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            err.to_string()
        })
}
