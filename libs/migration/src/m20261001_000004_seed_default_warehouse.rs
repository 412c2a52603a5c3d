use sea_orm_migration::prelude::*;

use crate::DEFAULT_WAREHOUSE_ID;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&format!(
            "INSERT INTO warehouses (id, name) VALUES ({DEFAULT_WAREHOUSE_ID}, 'Main Warehouse') \
             ON CONFLICT (id) DO NOTHING"
        ))
        .await?;

        // explicit id above leaves the BIGSERIAL sequence behind
        db.execute_unprepared(
            r#"
            SELECT setval(
                pg_get_serial_sequence('warehouses', 'id'),
                (SELECT MAX(id) FROM warehouses)
            )
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DELETE FROM warehouses WHERE id = {DEFAULT_WAREHOUSE_ID} \
                 AND NOT EXISTS (SELECT 1 FROM products WHERE warehouse_id = {DEFAULT_WAREHOUSE_ID})"
            ))
            .await?;

        Ok(())
    }
}
