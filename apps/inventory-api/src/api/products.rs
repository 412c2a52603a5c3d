//! Products API routes

use axum::Router;
use domain_inventory::{handlers, PgInventoryRepository, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgInventoryRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
