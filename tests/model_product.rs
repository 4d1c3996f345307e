/// Unit tests for the Product model
/// Run: cargo t --test model_product -- --nocapture --show-output
use chrono::NaiveDate;
use product_api::models::{Product, ProductFields, ProductStatus};

fn fields(date: &str) -> ProductFields {
    ProductFields {
        title: "Walnut desk".to_string(),
        desc: "Solid walnut".to_string(),
        status: ProductStatus::Publish,
        date: date.to_string(),
        category: "Furniture".to_string(),
    }
}

#[test]
fn test_product_default_values() {
    let product = Product::default();

    assert_eq!(product.id, 0);
    assert_eq!(product.status, ProductStatus::Draft);
    assert!(product.date.is_none());
    assert!(product.created_at.is_none());
}

#[test]
fn test_product_serializes_canonical_timestamps() {
    let at = NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|date| date.and_hms_opt(10, 30, 0));
    let product = Product {
        id: 3,
        title: "Walnut desk".to_string(),
        desc: "Solid walnut".to_string(),
        status: ProductStatus::Publish,
        date: at,
        category: "Furniture".to_string(),
        created_at: at,
        updated_at: None,
    };

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["status"], "Publish");
    assert_eq!(json["date"], "2024-03-15 10:30:00");
    assert_eq!(json["created_at"], "2024-03-15 10:30:00");
    assert!(json["updated_at"].is_null());
}

#[test]
fn test_product_deserialization_normalizes_dates() {
    let json = r#"{
        "id": 1,
        "title": "Oak shelf",
        "desc": "Three boards",
        "status": "Draft",
        "date": "2024-03-15T12:30:00+02:00",
        "category": "Furniture",
        "created_at": "15.03.2024",
        "updated_at": null
    }"#;

    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.status, ProductStatus::Draft);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["date"], "2024-03-15 10:30:00");
    assert_eq!(json["created_at"], "2024-03-15 00:00:00");
    assert!(json["updated_at"].is_null());
}

#[test]
fn test_product_status_is_exact() {
    assert_eq!("Publish".parse::<ProductStatus>(), Ok(ProductStatus::Publish));
    assert_eq!("Draft".parse::<ProductStatus>(), Ok(ProductStatus::Draft));
    assert!("publish".parse::<ProductStatus>().is_err());
    assert!("Archived".parse::<ProductStatus>().is_err());
    assert!(serde_json::from_str::<ProductStatus>(r#""Archived""#).is_err());
}

#[test]
fn test_new_product_normalizes_date() {
    let product = Product::new(fields("03/15/2024 16:05")).unwrap();

    assert_eq!(product.id, 0);
    assert_eq!(product.title, "Walnut desk");
    assert_eq!(
        product.date,
        NaiveDate::from_ymd_opt(2024, 3, 15).and_then(|date| date.and_hms_opt(16, 5, 0))
    );
}

#[test]
fn test_apply_keeps_product_when_date_is_invalid() {
    let mut product = Product::new(fields("2024-03-15")).unwrap();
    let before = product.clone();

    let mut update = fields("not a date");
    update.title = "Renamed".to_string();

    assert!(product.apply(update).is_err());
    assert_eq!(product, before);
}
