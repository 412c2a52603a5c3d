use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261001_000001_create_warehouses::Warehouses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Products::Name))
                    .col(string(Products::Sku))
                    // unscaled NUMERIC, stored exactly as validated
                    .col(ColumnDef::new(Products::Price).decimal().not_null())
                    .col(big_integer(Products::WarehouseId))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("products_warehouse_id_fkey")
                            .from(Products::Table, Products::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Named so violations can be told apart by constraint name
        let db = manager.get_connection();
        db.execute_unprepared("ALTER TABLE products ADD CONSTRAINT products_sku_key UNIQUE (sku)")
            .await?;
        db.execute_unprepared(
            "ALTER TABLE products ADD CONSTRAINT products_price_check CHECK (price >= 0)",
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_warehouse_id")
                    .table(Products::Table)
                    .col(Products::WarehouseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Products {
    Table,
    Id,
    Name,
    Sku,
    Price,
    WarehouseId,
    CreatedAt,
}
