//! Environment Configuration
//!
//! Runtime configuration is read once at startup from environment variables.
//! There is no configuration file; every knob has a development-friendly
//! default so `cargo run` works out of the box.

/// Default HTTP port when `PORT` is not set
const DEFAULT_PORT: u16 = 3000;

/// Default store connection string (embedded RocksDB under ./data)
const DEFAULT_DB_URL: &str = "rocksdb://data/cinedex.db";

/// Runtime configuration resolved from the environment
///
/// # Environment Variables
///
/// - `PORT` - HTTP listen port (default 3000)
/// - `CATALOG_DB_URL` - SurrealDB connection string. Accepts any engine the
///   `surrealdb` crate supports: `rocksdb://path` (embedded), `ws://host:port`
///   or `http://host:port` (remote), `mem://` (volatile, used by tests)
/// - `CATALOG_ENV` - Environment name, informational only (default "development")
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub environment: String,
}

impl Config {
    /// Resolve configuration from the process environment
    ///
    /// Unparseable values fall back to defaults rather than aborting startup;
    /// a wrong `PORT` surfaces immediately when the listener binds elsewhere.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            std::env::var("CATALOG_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());

        let environment =
            std::env::var("CATALOG_ENV").unwrap_or_else(|_| "development".to_string());

        Self {
            port,
            database_url,
            environment,
        }
    }
}
