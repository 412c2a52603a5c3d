use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{
    INVENTORY_QUANTITY_CHECK, InventoryError, InventoryResult, PRODUCTS_PRICE_CHECK,
    PRODUCTS_SKU_KEY, PRODUCTS_WAREHOUSE_FKEY,
};
use crate::models::{CreatedProduct, InventoryRecord, NewProduct, Product};

/// Warehouse seeded by the migrations; the in-memory store starts with it too.
pub const DEFAULT_WAREHOUSE_ID: i64 = 1;

/// Persistence for product creation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Check whether a warehouse with this id exists
    async fn warehouse_exists(&self, warehouse_id: i64) -> InventoryResult<bool>;

    /// Insert the product and its initial inventory row as one unit.
    ///
    /// Either both rows are stored or neither is. Constraint violations come
    /// back as [`InventoryError::DuplicateSku`] or
    /// [`InventoryError::ConstraintViolation`].
    async fn create_with_initial_stock(&self, input: NewProduct)
    -> InventoryResult<CreatedProduct>;
}

#[derive(Debug, Default)]
struct Store {
    warehouses: BTreeSet<i64>,
    products: HashMap<i64, Product>,
    inventory: Vec<InventoryRecord>,
    next_product_id: i64,
    next_inventory_id: i64,
}

/// In-memory implementation of InventoryRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryInventoryRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryInventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryInventoryRepository {
    /// Store with only the default warehouse
    pub fn new() -> Self {
        Self::with_warehouses([DEFAULT_WAREHOUSE_ID])
    }

    pub fn with_warehouses(ids: impl IntoIterator<Item = i64>) -> Self {
        let store = Store {
            warehouses: ids.into_iter().collect(),
            next_product_id: 1,
            next_inventory_id: 1,
            ..Default::default()
        };

        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn product_count(&self) -> usize {
        self.store.read().await.products.len()
    }

    pub async fn product_by_sku(&self, sku: &str) -> Option<Product> {
        let store = self.store.read().await;
        store.products.values().find(|p| p.sku == sku).cloned()
    }

    /// Inventory rows recorded for a product
    pub async fn inventory_for(&self, product_id: i64) -> Vec<InventoryRecord> {
        let store = self.store.read().await;
        store
            .inventory
            .iter()
            .filter(|record| record.product_id == product_id)
            .cloned()
            .collect()
    }
}

impl Store {
    /// Same checks the schema enforces, run before anything is written.
    fn check_constraints(&self, input: &NewProduct) -> InventoryResult<()> {
        if self.products.values().any(|p| p.sku == input.sku) {
            return Err(InventoryError::from_constraint(
                Some(PRODUCTS_SKU_KEY.to_string()),
                &input.sku,
            ));
        }

        let violated = if input.price < Decimal::ZERO {
            Some(PRODUCTS_PRICE_CHECK)
        } else if !self.warehouses.contains(&input.warehouse_id) {
            Some(PRODUCTS_WAREHOUSE_FKEY)
        } else if input.initial_quantity < 0 {
            Some(INVENTORY_QUANTITY_CHECK)
        } else {
            None
        };

        match violated {
            Some(constraint) => Err(InventoryError::from_constraint(
                Some(constraint.to_string()),
                &input.sku,
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn warehouse_exists(&self, warehouse_id: i64) -> InventoryResult<bool> {
        let store = self.store.read().await;
        Ok(store.warehouses.contains(&warehouse_id))
    }

    async fn create_with_initial_stock(
        &self,
        input: NewProduct,
    ) -> InventoryResult<CreatedProduct> {
        let mut store = self.store.write().await;
        store.check_constraints(&input)?;

        let now = Utc::now();
        let product_id = store.next_product_id;
        store.next_product_id += 1;
        let inventory_id = store.next_inventory_id;
        store.next_inventory_id += 1;

        store.products.insert(
            product_id,
            Product {
                id: product_id,
                name: input.name,
                sku: input.sku.clone(),
                price: input.price,
                warehouse_id: input.warehouse_id,
                created_at: now,
            },
        );
        store.inventory.push(InventoryRecord {
            id: inventory_id,
            product_id,
            warehouse_id: input.warehouse_id,
            quantity: input.initial_quantity,
            created_at: now,
        });

        tracing::info!(product_id, sku = %input.sku, "Created product with initial stock");
        Ok(CreatedProduct {
            product_id,
            sku: input.sku,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn new_product(sku: &str, quantity: i32) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            sku: sku.to_string(),
            price: Decimal::from_str("9.99").unwrap(),
            warehouse_id: DEFAULT_WAREHOUSE_ID,
            initial_quantity: quantity,
        }
    }

    #[tokio::test]
    async fn test_default_warehouse_exists() {
        let repo = InMemoryInventoryRepository::new();

        assert!(repo.warehouse_exists(DEFAULT_WAREHOUSE_ID).await.unwrap());
        assert!(!repo.warehouse_exists(99).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_stores_product_and_inventory() {
        let repo = InMemoryInventoryRepository::new();

        let created = repo
            .create_with_initial_stock(new_product("ABC-1", 10))
            .await
            .unwrap();

        assert_eq!(created.sku, "ABC-1");
        assert_eq!(repo.product_count().await, 1);

        let inventory = repo.inventory_for(created.product_id).await;
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].quantity, 10);
        assert_eq!(inventory[0].warehouse_id, DEFAULT_WAREHOUSE_ID);
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryInventoryRepository::new();

        let first = repo.create_with_initial_stock(new_product("A", 1)).await.unwrap();
        let second = repo.create_with_initial_stock(new_product("B", 1)).await.unwrap();

        assert_eq!(second.product_id, first.product_id + 1);
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected() {
        let repo = InMemoryInventoryRepository::new();
        repo.create_with_initial_stock(new_product("ABC-1", 1))
            .await
            .unwrap();

        let err = repo
            .create_with_initial_stock(new_product("ABC-1", 5))
            .await
            .unwrap_err();

        assert!(matches!(err, InventoryError::DuplicateSku(_)));
        assert_eq!(repo.product_count().await, 1);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_no_rows() {
        let repo = InMemoryInventoryRepository::new();

        let err = repo
            .create_with_initial_stock(new_product("NEG", -1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InventoryError::ConstraintViolation(Some(ref name)) if name == INVENTORY_QUANTITY_CHECK
        ));
        assert_eq!(repo.product_count().await, 0);
        assert!(repo.product_by_sku("NEG").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_warehouse_violates_foreign_key() {
        let repo = InMemoryInventoryRepository::with_warehouses([7]);

        let err = repo
            .create_with_initial_stock(new_product("ABC-1", 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InventoryError::ConstraintViolation(Some(ref name)) if name == PRODUCTS_WAREHOUSE_FKEY
        ));
    }
}
