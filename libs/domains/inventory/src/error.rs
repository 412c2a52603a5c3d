use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Unique constraint on `products.sku`.
pub const PRODUCTS_SKU_KEY: &str = "products_sku_key";
/// `CHECK (price >= 0)` on `products.price`.
pub const PRODUCTS_PRICE_CHECK: &str = "products_price_check";
/// Foreign key from `products.warehouse_id` to `warehouses.id`.
pub const PRODUCTS_WAREHOUSE_FKEY: &str = "products_warehouse_id_fkey";
/// `CHECK (quantity >= 0)` on `inventory.quantity`.
pub const INVENTORY_QUANTITY_CHECK: &str = "inventory_quantity_check";

/// Failure modes of product creation.
///
/// `Display` is the message returned to the client for every variant except
/// `Database` and `Internal`, whose detail is only logged.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("No JSON data provided")]
    EmptyPayload,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price format")]
    InvalidPrice,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Initial quantity must be non-negative integer")]
    InvalidQuantity,

    #[error("Name must be a non-empty string")]
    InvalidName,

    #[error("SKU must be a non-empty string")]
    InvalidSku,

    #[error("Warehouse not found")]
    WarehouseNotFound,

    /// The offending SKU is kept for logs only.
    #[error("SKU already exists")]
    DuplicateSku(String),

    /// Any other integrity violation, with the constraint name when the driver reports one.
    #[error("Database constraint violation")]
    ConstraintViolation(Option<String>),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Map an integrity violation to the matching error by constraint name.
    pub fn from_constraint(constraint: Option<String>, sku: &str) -> Self {
        match constraint.as_deref() {
            Some(PRODUCTS_SKU_KEY) => InventoryError::DuplicateSku(sku.to_string()),
            _ => InventoryError::ConstraintViolation(constraint),
        }
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::WarehouseNotFound => AppError::NotFound(err.to_string()),
            InventoryError::DuplicateSku(ref sku) => {
                tracing::info!(sku = %sku, "Rejected duplicate SKU");
                AppError::Conflict(err.to_string())
            }
            InventoryError::ConstraintViolation(ref constraint) => {
                tracing::warn!(constraint = ?constraint, "Database constraint violation");
                AppError::BadRequest(err.to_string())
            }
            InventoryError::Database(_) | InventoryError::Internal(_) => {
                AppError::InternalServerError(err.to_string())
            }
            InventoryError::EmptyPayload
            | InventoryError::MissingField(_)
            | InventoryError::InvalidPrice
            | InventoryError::NegativePrice
            | InventoryError::InvalidQuantity
            | InventoryError::InvalidName
            | InventoryError::InvalidSku => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_sku_constraint_maps_to_duplicate() {
        let err = InventoryError::from_constraint(Some(PRODUCTS_SKU_KEY.to_string()), "ABC-1");
        assert!(matches!(err, InventoryError::DuplicateSku(ref sku) if sku == "ABC-1"));
    }

    #[test]
    fn test_other_constraints_map_to_violation() {
        let err =
            InventoryError::from_constraint(Some(INVENTORY_QUANTITY_CHECK.to_string()), "ABC-1");
        assert!(matches!(
            err,
            InventoryError::ConstraintViolation(Some(ref name)) if name == INVENTORY_QUANTITY_CHECK
        ));

        let err = InventoryError::from_constraint(None, "ABC-1");
        assert!(matches!(err, InventoryError::ConstraintViolation(None)));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (InventoryError::EmptyPayload, StatusCode::BAD_REQUEST),
            (InventoryError::MissingField("sku"), StatusCode::BAD_REQUEST),
            (InventoryError::NegativePrice, StatusCode::BAD_REQUEST),
            (InventoryError::WarehouseNotFound, StatusCode::NOT_FOUND),
            (InventoryError::DuplicateSku("A".into()), StatusCode::CONFLICT),
            (InventoryError::ConstraintViolation(None), StatusCode::BAD_REQUEST),
            (
                InventoryError::Database("pool timed out".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(
            InventoryError::MissingField("warehouse_id").to_string(),
            "Missing required field: warehouse_id"
        );
        assert_eq!(
            InventoryError::DuplicateSku("ABC-1".into()).to_string(),
            "SKU already exists"
        );
        assert_eq!(
            InventoryError::ConstraintViolation(Some("x".into())).to_string(),
            "Database constraint violation"
        );
    }
}
