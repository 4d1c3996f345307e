use crate::helpers::{date, FieldErrors};
use crate::models::{ProductFields, ProductStatus};
use serde::Deserialize;
use serde_json::Value;
use serde_valid::Validate;
use std::fmt;
use utoipa::ToSchema;

/// Rule declaration order; the first failing field decides the response message.
pub const FIELDS: [&str; 5] = ["title", "desc", "status", "date", "category"];

/// Raw create/update payload. Fields stay untyped so that a wrong JSON type is
/// reported per field instead of failing the whole body.
#[derive(Default, Debug, Clone, Deserialize, ToSchema)]
#[schema(as = ProductRequest)]
pub struct ProductForm {
    #[schema(value_type = String, required = true, example = "Walnut desk")]
    pub title: Option<Value>,
    #[schema(value_type = String, required = true, example = "Solid walnut, oiled finish")]
    pub desc: Option<Value>,
    #[schema(value_type = ProductStatus, required = true)]
    pub status: Option<Value>,
    #[schema(value_type = String, format = DateTime, required = true, example = "2024-03-15 10:30:00")]
    pub date: Option<Value>,
    #[schema(value_type = String, required = true, example = "Furniture")]
    pub category: Option<Value>,
}

#[derive(Debug, Validate)]
struct LengthRules {
    #[validate(
        max_length = 255,
        message = "The title field must not be greater than 255 characters."
    )]
    title: String,
    #[validate(
        max_length = 255,
        message = "The category field must not be greater than 255 characters."
    )]
    category: String,
}

enum Field<'a> {
    Missing,
    NotString,
    Text(&'a str),
}

/// Outcome of a failed validation: the first message plus every failure per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub message: String,
    pub fields: FieldErrors,
}

impl FormErrors {
    fn from_failures(failures: Vec<(&str, Vec<String>)>) -> Option<Self> {
        let message = failures
            .iter()
            .find_map(|(_, messages)| messages.first())
            .cloned()?;
        let fields = failures
            .into_iter()
            .map(|(field, messages)| (field.to_string(), messages))
            .collect();

        Some(FormErrors { message, fields })
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ProductForm {
    /// Reads a request body. Anything that is not a JSON object counts as an
    /// empty payload and fails the regular rules.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|err| {
                tracing::debug!("Unreadable product payload: {}", err);
                ProductForm::default()
            }),
            _ => {
                tracing::debug!("Product payload is not a JSON object");
                ProductForm::default()
            }
        }
    }

    fn raw(&self, name: &str) -> Option<&Value> {
        match name {
            "title" => self.title.as_ref(),
            "desc" => self.desc.as_ref(),
            "status" => self.status.as_ref(),
            "date" => self.date.as_ref(),
            "category" => self.category.as_ref(),
            _ => None,
        }
    }

    // blank strings count as missing
    fn field(&self, name: &str) -> Field<'_> {
        match self.raw(name) {
            None | Some(Value::Null) => Field::Missing,
            Some(Value::String(text)) if text.trim().is_empty() => Field::Missing,
            Some(Value::String(text)) => Field::Text(text.trim()),
            Some(_) => Field::NotString,
        }
    }

    fn text(&self, name: &str) -> &str {
        match self.field(name) {
            Field::Text(text) => text,
            _ => "",
        }
    }

    fn length_report(&self) -> Value {
        let rules = LengthRules {
            title: self.text("title").to_string(),
            category: self.text("category").to_string(),
        };

        rules
            .validate()
            .err()
            .and_then(|errors| serde_json::to_value(errors).ok())
            .unwrap_or_default()
    }

    fn messages_for(&self, name: &str, report: &Value) -> Vec<String> {
        let value = match self.field(name) {
            Field::Missing => return vec![format!("The {name} field is required.")],
            Field::NotString if name == "status" => {
                return vec!["The selected status is invalid.".to_string()]
            }
            Field::NotString if name == "date" => {
                return vec!["The date field must be a valid date.".to_string()]
            }
            Field::NotString => return vec![format!("The {name} field must be a string.")],
            Field::Text(value) => value,
        };

        let mut messages: Vec<String> = report["properties"][name]["errors"]
            .as_array()
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        match name {
            "status" => {
                if let Err(err) = value.parse::<ProductStatus>() {
                    messages.push(err.to_string());
                }
            }
            "date" => {
                if date::normalize(value).is_err() {
                    messages.push("The date field must be a valid date.".to_string());
                }
            }
            _ => {}
        }

        messages
    }

    /// Checks every rule and hands back the typed fields, or all failures.
    pub fn validate_payload(&self) -> Result<ProductFields, FormErrors> {
        let report = self.length_report();
        let failures: Vec<(&str, Vec<String>)> = FIELDS
            .iter()
            .map(|name| (*name, self.messages_for(name, &report)))
            .filter(|(_, messages)| !messages.is_empty())
            .collect();

        if let Some(errors) = FormErrors::from_failures(failures) {
            tracing::debug!("Invalid product payload: {:?}", errors.fields);
            return Err(errors);
        }

        // status already passed its rule above
        Ok(ProductFields {
            title: self.text("title").to_string(),
            desc: self.text("desc").to_string(),
            status: self.text("status").parse().unwrap_or_default(),
            date: self.text("date").to_string(),
            category: self.text("category").to_string(),
        })
    }
}
