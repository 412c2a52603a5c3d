use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{InventoryError, InventoryResult};

/// Required request fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "sku", "price", "warehouse_id", "initial_quantity"];

pub const PRODUCT_CREATED_MESSAGE: &str = "Product created successfully";

/// Request body of `POST /api/products`, as documented.
///
/// The handler does not deserialize into this type: the raw JSON is validated
/// field by field by [`NewProduct::from_payload`] so every failure gets its
/// own message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,
    /// Stored trimmed and upper-cased; must be unique
    #[schema(example = "abc-1")]
    pub sku: String,
    /// Decimal as a JSON number or numeric string
    #[schema(value_type = String, example = "9.99")]
    pub price: Value,
    #[schema(example = 1)]
    pub warehouse_id: i64,
    #[schema(example = 10, minimum = 0)]
    pub initial_quantity: i32,
}

/// A validated product ready to be persisted with its initial stock.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Trimmed
    pub name: String,
    /// Trimmed, upper-case
    pub sku: String,
    pub price: Decimal,
    pub warehouse_id: i64,
    pub initial_quantity: i32,
}

/// Ids assigned by the store on a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProduct {
    pub product_id: i64,
    pub sku: String,
}

/// `201 Created` response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "Product created successfully")]
    pub message: String,
    #[schema(example = 42)]
    pub product_id: i64,
    #[schema(example = "ABC-1")]
    pub sku: String,
}

impl From<CreatedProduct> for ProductCreated {
    fn from(created: CreatedProduct) -> Self {
        Self {
            message: PRODUCT_CREATED_MESSAGE.to_string(),
            product_id: created.product_id,
            sku: created.sku,
        }
    }
}

/// A product row as held by the in-memory repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub warehouse_id: i64,
    pub created_at: DateTime<Utc>,
}

/// An inventory row as held by the in-memory repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    /// Validate a raw request payload.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. the payload is a non-empty JSON object
    /// 2. every field in [`REQUIRED_FIELDS`] is present and non-null
    /// 3. `price` is a decimal, then non-negative
    /// 4. `initial_quantity` is a non-negative integer that fits `i32`
    /// 5. `name` and `sku` are non-blank strings
    /// 6. `warehouse_id` is an integer (anything else cannot name a warehouse)
    pub fn from_payload(payload: Option<Value>) -> InventoryResult<Self> {
        let fields = match payload {
            Some(Value::Object(fields)) if !fields.is_empty() => fields,
            _ => return Err(InventoryError::EmptyPayload),
        };

        if let Some(missing) = first_missing_field(&fields) {
            return Err(InventoryError::MissingField(missing));
        }

        let price = parse_price(&fields["price"])?;
        let initial_quantity = parse_quantity(&fields["initial_quantity"])?;
        let name = non_blank(&fields["name"]).ok_or(InventoryError::InvalidName)?;
        let sku = non_blank(&fields["sku"])
            .ok_or(InventoryError::InvalidSku)?
            .to_uppercase();
        let warehouse_id = fields["warehouse_id"]
            .as_i64()
            .ok_or(InventoryError::WarehouseNotFound)?;

        Ok(Self {
            name: name.to_string(),
            sku,
            price,
            warehouse_id,
            initial_quantity,
        })
    }
}

fn first_missing_field(fields: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| fields.get(*field).is_none_or(Value::is_null))
}

/// Accepts JSON numbers and numeric strings, including scientific notation.
/// Numbers arrive with their literal digits (serde_json `arbitrary_precision`).
fn parse_price(value: &Value) -> InventoryResult<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return Err(InventoryError::InvalidPrice),
    };

    let price = Decimal::from_str_exact(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| InventoryError::InvalidPrice)?;

    if price < Decimal::ZERO {
        return Err(InventoryError::NegativePrice);
    }

    Ok(price)
}

/// JSON integers only: `2.0`, `"5"` and `true` are rejected.
fn parse_quantity(value: &Value) -> InventoryResult<i32> {
    value
        .as_i64()
        .filter(|quantity| *quantity >= 0)
        .and_then(|quantity| i32::try_from(quantity).ok())
        .ok_or(InventoryError::InvalidQuantity)
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn valid_payload() -> Value {
        json!({
            "name": "Widget",
            "sku": " abc-1 ",
            "price": "9.99",
            "warehouse_id": 1,
            "initial_quantity": 10
        })
    }

    fn with(field: &str, value: Value) -> Option<Value> {
        let mut payload = valid_payload();
        payload[field] = value;
        Some(payload)
    }

    fn without(field: &str) -> Option<Value> {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);
        Some(payload)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_payload_is_normalized() {
        let product = NewProduct::from_payload(Some(valid_payload())).unwrap();

        assert_eq!(
            product,
            NewProduct {
                name: "Widget".to_string(),
                sku: "ABC-1".to_string(),
                price: dec("9.99"),
                warehouse_id: 1,
                initial_quantity: 10,
            }
        );
    }

    #[test]
    fn test_missing_or_empty_payload() {
        for payload in [None, Some(json!({})), Some(json!([1, 2])), Some(json!("text"))] {
            assert!(matches!(
                NewProduct::from_payload(payload),
                Err(InventoryError::EmptyPayload)
            ));
        }
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let err = NewProduct::from_payload(Some(json!({"price": "1.00"}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");

        for field in REQUIRED_FIELDS {
            let err = NewProduct::from_payload(without(field)).unwrap_err();
            assert_eq!(err.to_string(), format!("Missing required field: {field}"));
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = NewProduct::from_payload(with("sku", Value::Null)).unwrap_err();
        assert!(matches!(err, InventoryError::MissingField("sku")));
    }

    #[test]
    fn test_price_formats() {
        let accepted = [
            (json!(9.99), "9.99"),
            (json!(0), "0"),
            (json!("  12.50 "), "12.50"),
            (json!("1e3"), "1000"),
            (json!("2.5e-1"), "0.25"),
        ];
        for (raw, expected) in accepted {
            let product = NewProduct::from_payload(with("price", raw.clone())).unwrap();
            assert_eq!(product.price, dec(expected), "price {raw}");
        }

        for raw in [json!("abc"), json!(""), json!(true), json!("NaN"), json!([1]), json!({})] {
            let err = NewProduct::from_payload(with("price", raw.clone())).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidPrice), "price {raw}");
        }
    }

    #[test]
    fn test_negative_price() {
        for raw in [json!(-0.01), json!("-5")] {
            let err = NewProduct::from_payload(with("price", raw)).unwrap_err();
            assert_eq!(err.to_string(), "Price cannot be negative");
        }
    }

    #[test]
    fn test_price_keeps_exact_decimal() {
        let product = NewProduct::from_payload(with("price", json!("0.1"))).unwrap();
        assert_eq!(product.price * Decimal::from(3), dec("0.3"));
    }

    #[test]
    fn test_numeric_price_keeps_every_digit() {
        let cases = [
            ("0.12345678901234567891", "0.12345678901234567891"),
            ("12345678901234567890123", "12345678901234567890123"),
            ("19.990000000000000001", "19.990000000000000001"),
        ];

        for (literal, expected) in cases {
            let body = format!(
                r#"{{"name": "Widget", "sku": "abc-1", "price": {literal}, "warehouse_id": 1, "initial_quantity": 1}}"#
            );
            let payload: Value = serde_json::from_str(&body).unwrap();

            let product = NewProduct::from_payload(Some(payload)).unwrap();
            assert_eq!(product.price, dec(expected), "price {literal}");
            assert_eq!(product.price.to_string(), expected);
        }
    }

    #[test]
    fn test_quantity_must_be_non_negative_integer() {
        for raw in [json!(-1), json!(2.5), json!(2.0), json!("5"), json!(true), json!(3_000_000_000u64)] {
            let err = NewProduct::from_payload(with("initial_quantity", raw.clone())).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidQuantity), "quantity {raw}");
        }

        let product = NewProduct::from_payload(with("initial_quantity", json!(0))).unwrap();
        assert_eq!(product.initial_quantity, 0);
    }

    #[test]
    fn test_price_checked_before_quantity() {
        let mut payload = valid_payload();
        payload["price"] = json!("oops");
        payload["initial_quantity"] = json!(-1);

        let err = NewProduct::from_payload(Some(payload)).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidPrice));
    }

    #[test]
    fn test_blank_name_and_sku() {
        let err = NewProduct::from_payload(with("name", json!("   "))).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidName));

        let err = NewProduct::from_payload(with("sku", json!(123))).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidSku));
    }

    #[test]
    fn test_non_integer_warehouse_cannot_exist() {
        for raw in [json!("1"), json!(1.5), json!(false)] {
            let err = NewProduct::from_payload(with("warehouse_id", raw)).unwrap_err();
            assert!(matches!(err, InventoryError::WarehouseNotFound));
        }
    }

    #[test]
    fn test_product_created_body() {
        let body = ProductCreated::from(CreatedProduct {
            product_id: 7,
            sku: "ABC-1".to_string(),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"message": "Product created successfully", "product_id": 7, "sku": "ABC-1"})
        );
    }
}
