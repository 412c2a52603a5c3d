//! Inventory Domain
//!
//! Creates a product and its initial inventory row in one transaction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /api/products
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Payload validation, warehouse check
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Transactional insert (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     repository::InMemoryInventoryRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryInventoryRepository::new();
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{InventoryError, InventoryResult};
pub use models::{CreateProductRequest, CreatedProduct, NewProduct, ProductCreated};
pub use postgres::PgInventoryRepository;
pub use repository::{InMemoryInventoryRepository, InventoryRepository};
pub use service::ProductService;
