//! Database Connection Management
//!
//! One [`Database`] handle is created at process startup from the configured
//! connection string and shared (cheaply cloned) for the process lifetime.
//! SurrealDB manages its own connection pooling internally; this layer never
//! re-establishes the connection per request.
//!
//! # Connection Strings
//!
//! The `engine::any` connector selects the backend from the URL scheme:
//!
//! - `rocksdb://data/cinedex.db` - embedded RocksDB (default deployment)
//! - `ws://127.0.0.1:8000` / `http://127.0.0.1:8000` - remote server
//! - `mem://` - volatile in-memory store (tests)

use crate::db::DatabaseError;
use std::sync::Arc;
use surrealdb::engine::any::{connect, Any};
use surrealdb::Surreal;
use tracing::info;

/// Namespace and database names within SurrealDB
const NAMESPACE: &str = "cinedex";
const DATABASE: &str = "catalog";

/// Process-wide SurrealDB handle
///
/// Cloning is cheap (shared `Arc`); every clone talks to the same underlying
/// connection.
#[derive(Clone)]
pub struct Database {
    db: Arc<Surreal<Any>>,
}

impl Database {
    /// Connect to SurrealDB and initialize the catalog schema
    ///
    /// # Arguments
    ///
    /// * `url` - Connection string (see module docs for accepted schemes)
    ///
    /// # Errors
    ///
    /// Returns error if the connection cannot be established, the
    /// namespace/database selection fails, or schema initialization fails.
    pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
        let db = connect(url)
            .await
            .map_err(|e| DatabaseError::connection_failed(url, e))?;

        db.use_ns(NAMESPACE).use_db(DATABASE).await.map_err(|e| {
            DatabaseError::initialization_failed(format!(
                "Failed to select namespace/database: {e}"
            ))
        })?;

        let db = Arc::new(db);
        Self::initialize_schema(&db).await?;

        info!("Connected to SurrealDB at {}", url);

        Ok(Self { db })
    }

    /// Initialize catalog tables
    ///
    /// Both tables are SCHEMALESS: field shape is owned by the application
    /// (validation happens before writes), and the store enforces nothing
    /// beyond per-document atomicity. In particular there are no foreign
    /// keys between movies and genres.
    async fn initialize_schema(db: &Surreal<Any>) -> Result<(), DatabaseError> {
        db.query("DEFINE TABLE IF NOT EXISTS genre SCHEMALESS;")
            .await
            .map_err(|e| {
                DatabaseError::initialization_failed(format!("Failed to define genre table: {e}"))
            })?;

        db.query("DEFINE TABLE IF NOT EXISTS movie SCHEMALESS;")
            .await
            .map_err(|e| {
                DatabaseError::initialization_failed(format!("Failed to define movie table: {e}"))
            })?;

        Ok(())
    }

    /// Access the underlying SurrealDB client
    pub(crate) fn client(&self) -> &Surreal<Any> {
        &self.db
    }

    /// Tear down the handle at shutdown
    ///
    /// SurrealDB has no explicit disconnect; dropping the last clone releases
    /// the engine. This method exists so the lifecycle is explicit at the
    /// call site rather than implied by scope.
    pub async fn close(self) {
        info!("Closing SurrealDB connection");
        drop(self.db);
    }
}
