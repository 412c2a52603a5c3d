use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::NewProduct;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub sku: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub price: Decimal,
    pub warehouse_id: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// id and created_at come from the column defaults
impl From<&NewProduct> for ActiveModel {
    fn from(input: &NewProduct) -> Self {
        Self {
            name: Set(input.name.clone()),
            sku: Set(input.sku.clone()),
            price: Set(input.price),
            warehouse_id: Set(input.warehouse_id),
            ..Default::default()
        }
    }
}
