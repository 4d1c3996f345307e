use crate::helpers::date::{self, NormalizationError};
use chrono::NaiveDateTime;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum ProductStatus {
    Publish,
    #[default]
    Draft,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Publish => "Publish",
            ProductStatus::Draft => "Draft",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The selected status is invalid. Allowed values: Publish, Draft.")]
pub struct UnknownStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownStatus;

    // exact match only, "publish" is not a status
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Publish" => Ok(ProductStatus::Publish),
            "Draft" => Ok(ProductStatus::Draft),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for ProductStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The five business fields of a product after the payload passed validation.
/// `date` is still the text the client sent; it is normalized when applied to a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub title: String,
    pub desc: String,
    pub status: ProductStatus,
    pub date: String,
    pub category: String,
}

/// One row of the `products` table.
///
/// Timestamps are kept as naive UTC values and always serialize as
/// `YYYY-MM-DD HH:MM:SS` (or `null`).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub desc: String,
    #[sqlx(try_from = "String")]
    pub status: ProductStatus,
    #[serde(with = "date::canonical", default)]
    #[schema(value_type = String, format = DateTime, example = "2024-03-15 10:30:00")]
    pub date: Option<NaiveDateTime>,
    pub category: String,
    #[serde(with = "date::canonical", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(with = "date::canonical", default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// A not yet stored product; id and timestamps come from the database.
    pub fn new(fields: ProductFields) -> Result<Self, NormalizationError> {
        let mut product = Product::default();
        product.apply(fields)?;

        Ok(product)
    }

    /// Replaces all business fields. Nothing changes if the date does not parse.
    pub fn apply(&mut self, fields: ProductFields) -> Result<(), NormalizationError> {
        self.set_date(&fields.date)?;

        self.title = fields.title;
        self.desc = fields.desc;
        self.status = fields.status;
        self.category = fields.category;

        Ok(())
    }

    pub fn set_date(&mut self, value: &str) -> Result<(), NormalizationError> {
        self.date = Some(date::normalize(value)?);
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "product #{} `{}` ({}, {})",
            self.id, self.title, self.status, self.category
        )
    }
}
