pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_warehouses;
mod m20261001_000002_create_products;
mod m20261001_000003_create_inventory;
mod m20261001_000004_seed_default_warehouse;

/// Id of the warehouse inserted by the seed migration.
pub const DEFAULT_WAREHOUSE_ID: i64 = 1;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_warehouses::Migration),
            Box::new(m20261001_000002_create_products::Migration),
            Box::new(m20261001_000003_create_inventory::Migration),
            Box::new(m20261001_000004_seed_default_warehouse::Migration),
        ]
    }
}
