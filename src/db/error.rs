//! Database Error Types
//!
//! This module defines error types for database operations, covering
//! connection, initialization, query, and record-decoding failures. The
//! service layer wraps these in its own taxonomy; HTTP handlers only ever
//! see the fixed per-operation messages, never this detail.

use thiserror::Error;

/// Database operation errors
///
/// Covers all error cases for the SurrealDB layer. Higher-level concerns
/// (missing entities, validation) are handled by service-layer error types;
/// an absent record is `Ok(None)` here, not an error.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish database connection
    #[error("Failed to connect to database at {url}: {source}")]
    ConnectionFailed {
        url: String,
        source: surrealdb::Error,
    },

    /// Failed to initialize database schema
    #[error("Failed to initialize database schema: {0}")]
    InitializationFailed(String),

    /// Query execution failed inside the engine
    #[error("{context}: {source}")]
    QueryFailed {
        context: &'static str,
        source: surrealdb::Error,
    },

    /// Query succeeded but produced no record where one was required
    #[error("Query returned no record: {context}")]
    MissingRecord { context: &'static str },

    /// A stored document does not match the expected record shape
    #[error("Malformed {table} record: {detail}")]
    MalformedRecord {
        table: &'static str,
        detail: String,
    },
}

impl DatabaseError {
    /// Create a connection failed error
    pub fn connection_failed(url: impl Into<String>, source: surrealdb::Error) -> Self {
        Self::ConnectionFailed {
            url: url.into(),
            source,
        }
    }

    /// Create an initialization failed error
    pub fn initialization_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    /// Create a query failed error with call-site context
    pub fn query_failed(context: &'static str, source: surrealdb::Error) -> Self {
        Self::QueryFailed { context, source }
    }

    /// Create a missing record error
    pub fn missing_record(context: &'static str) -> Self {
        Self::MissingRecord { context }
    }

    /// Create a malformed record error for a stored document
    pub fn malformed_record(table: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            table,
            detail: detail.into(),
        }
    }
}
