use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreatedProduct, NewProduct};
use crate::repository::InventoryRepository;

/// Service layer for product creation
#[derive(Clone)]
pub struct ProductService<R: InventoryRepository> {
    repository: Arc<R>,
}

impl<R: InventoryRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the payload, confirm the warehouse and store the product with
    /// its initial stock.
    ///
    /// `None` means the request carried no usable JSON.
    #[instrument(skip_all)]
    pub async fn create_product(&self, payload: Option<Value>) -> InventoryResult<CreatedProduct> {
        let input = NewProduct::from_payload(payload)?;

        if !self.repository.warehouse_exists(input.warehouse_id).await? {
            return Err(InventoryError::WarehouseNotFound);
        }

        self.repository.create_with_initial_stock(input).await
    }
}
