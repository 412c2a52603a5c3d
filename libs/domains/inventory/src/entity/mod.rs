//! SeaORM entities for the tables created by the `migration` crate.

pub mod inventory;
pub mod product;
pub mod warehouse;
