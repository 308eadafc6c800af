//! Cinedex - Movie and Genre Catalog Service
//!
//! This crate provides a small CRUD REST API over two related collections,
//! movies and genres, stored as schemaless documents in SurrealDB.
//!
//! # Architecture
//!
//! - **Natural keys**: Records are looked up by business-meaningful fields
//!   (`Genre.name`, `Movie.title`), not surrogate ids
//! - **Validated write path**: Movie writes pass field-presence checks plus a
//!   referential check confirming every referenced genre name exists
//! - **SurrealDB**: Embedded or remote document store selected by connection
//!   string (`rocksdb://`, `ws://`, `mem://` for tests)
//!
//! # Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`models`] - Data structures (Genre, Movie) and request payloads
//! - [`db`] - Database layer with store traits and SurrealDB implementations
//! - [`services`] - Business services (validation, catalog orchestration)
//! - [`server`] - HTTP layer (axum routers, error shaping)

pub mod config;
pub mod db;
pub mod models;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
pub use services::*;
