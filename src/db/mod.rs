//! Database Layer
//!
//! This module handles all SurrealDB interactions:
//!
//! - Connection management ([`Database`]) - one process-wide handle,
//!   established at startup and reused for the process lifetime
//! - SCHEMALESS table storage for genre and movie documents
//! - Store traits ([`GenreStore`], [`MovieStore`]) abstracting persistence
//!   from the service layer, with SurrealDB-backed implementations
//!
//! # Architecture
//!
//! The store traits are the seam between business logic and SurrealDB.
//! Services only see `Arc<dyn GenreStore>` / `Arc<dyn MovieStore>`, which
//! keeps orchestration testable with in-memory or failure-injecting doubles.
//!
//! All methods are async and return `Result<_, DatabaseError>`; query
//! context is attached at the call site and interpreted at the handler
//! boundary.

mod database;
mod error;
mod genre_store;
mod movie_store;

pub use database::Database;
pub use error::DatabaseError;
pub use genre_store::{GenreStore, SurrealGenreStore};
pub use movie_store::{MovieStore, SurrealMovieStore};
