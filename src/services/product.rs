//! Product operations, independent of the HTTP layer.
//!
//! Reads go straight to the pool. Every write runs in its own transaction that
//! is committed on success and rolled back on any failure.

use crate::db;
use crate::forms::product::{FormErrors, ProductForm};
use crate::helpers::date::NormalizationError;
use crate::models::Product;
use sqlx::{PgPool, Postgres, Transaction};

pub type Result<T> = std::result::Result<T, ProductError>;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("No products found")]
    Empty,
    #[error("Product not found")]
    NotFound,
    #[error("{0}")]
    Validation(FormErrors),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Transaction error: {:?}", err);
        ProductError::Database(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        let products = db::product::fetch_all(&self.pool)
            .await
            .map_err(ProductError::Database)?;

        if products.is_empty() {
            return Err(ProductError::Empty);
        }

        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        db::product::fetch(&self.pool, id)
            .await
            .map_err(ProductError::Database)?
            .ok_or(ProductError::NotFound)
    }

    pub async fn create(&self, form: &ProductForm) -> Result<Product> {
        let fields = form.validate_payload().map_err(ProductError::Validation)?;
        let product = Product::new(fields)?;

        let mut tx = self.pool.begin().await?;
        let result = db::product::insert(&mut *tx, product)
            .await
            .map_err(ProductError::Database);

        settle(tx, result).await
    }

    /// Lookup comes first: an unknown id is `NotFound` whatever the payload holds.
    pub async fn update(&self, id: i64, form: &ProductForm) -> Result<Product> {
        let mut product = self.get(id).await?;
        let fields = form.validate_payload().map_err(ProductError::Validation)?;
        product.apply(fields)?;

        let mut tx = self.pool.begin().await?;
        let result = db::product::update(&mut *tx, product)
            .await
            .map_err(ProductError::Database)
            .and_then(|updated| updated.ok_or(ProductError::NotFound));

        settle(tx, result).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let product = self.get(id).await?;

        let mut tx = self.pool.begin().await?;
        let result = db::product::delete(&mut *tx, product.id)
            .await
            .map_err(ProductError::Database)
            .and_then(|deleted| match deleted {
                true => Ok(()),
                false => Err(ProductError::NotFound),
            });

        settle(tx, result).await
    }
}

/// Commits when `result` is a success, rolls back otherwise and passes the error through.
async fn settle<T>(tx: Transaction<'_, Postgres>, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Failed to roll back transaction: {:?}", rollback_err);
            }
            Err(err)
        }
    }
}
