use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, RuntimeErr,
    TransactionTrait,
};

use crate::{
    entity::{inventory, product, warehouse},
    error::{InventoryError, InventoryResult},
    models::{CreatedProduct, NewProduct},
    repository::InventoryRepository,
};

/// SQLSTATE class for integrity constraint violations.
const INTEGRITY_VIOLATION_CLASS: &str = "23";

pub struct PgInventoryRepository {
    db: DatabaseConnection,
}

impl PgInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn warehouse_exists(&self, warehouse_id: i64) -> InventoryResult<bool> {
        let found = warehouse::Entity::find_by_id(warehouse_id)
            .one(&self.db)
            .await
            .map_err(|e| InventoryError::Database(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn create_with_initial_stock(
        &self,
        input: NewProduct,
    ) -> InventoryResult<CreatedProduct> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InventoryError::Database(e.to_string()))?;

        match insert_product_with_stock(&txn, &input).await {
            Ok(product_id) => {
                txn.commit()
                    .await
                    .map_err(|e| classify_db_error(e, &input.sku))?;

                tracing::info!(product_id, sku = %input.sku, "Created product with initial stock");
                Ok(CreatedProduct {
                    product_id,
                    sku: input.sku,
                })
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback failed");
                }
                Err(classify_db_error(e, &input.sku))
            }
        }
    }
}

/// Both inserts on the caller's connection, product first so the inventory
/// row can reference its id.
async fn insert_product_with_stock<C>(conn: &C, input: &NewProduct) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    let product = product::ActiveModel::from(input).insert(conn).await?;

    inventory::ActiveModel::initial_stock(product.id, input.warehouse_id, input.initial_quantity)
        .insert(conn)
        .await?;

    Ok(product.id)
}

/// Integrity violations become domain errors keyed on the constraint name;
/// everything else is an opaque database failure.
fn classify_db_error(err: DbErr, sku: &str) -> InventoryError {
    match integrity_violation(&err) {
        Some(constraint) => {
            tracing::debug!(constraint = ?constraint, "Integrity constraint violated");
            InventoryError::from_constraint(constraint, sku)
        }
        None => InventoryError::Database(err.to_string()),
    }
}

/// `Some(constraint name)` when the driver reports SQLSTATE class 23.
fn integrity_violation(err: &DbErr) -> Option<Option<String>> {
    let sqlx_err = match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e,
        _ => return None,
    };
    let db_err = sqlx_err.as_database_error()?;
    let code = db_err.code()?;

    code.starts_with(INTEGRITY_VIOLATION_CLASS)
        .then(|| db_err.constraint().map(str::to_owned))
}
