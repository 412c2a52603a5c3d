//! Custom extractors for Axum handlers.

pub mod optional_json;

pub use optional_json::OptionalJson;
