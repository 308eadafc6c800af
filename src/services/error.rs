//! Service Layer Error Types
//!
//! Error taxonomy for catalog operations:
//!
//! - `Validation` - missing/empty required fields and unresolved genre
//!   references, surfaced to clients as 400 with the full issue list
//! - `NotFound` - no entity for the given natural key, surfaced as 404
//! - `Store` - underlying store failure, logged at the handler boundary and
//!   surfaced as 500 with a fixed operation-specific message; internal detail
//!   never reaches the client

use crate::db::DatabaseError;
use serde::Serialize;
use thiserror::Error;

/// A single validation failure, carrying the offending field path and a
/// human-readable message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Catalog operation errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No entity matched the given natural key
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// One or more validation checks failed; issues accumulate in check
    /// order rather than short-circuiting
    #[error("validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// Store operation failed; terminal for the current request, no retries
    #[error("store operation failed: {0}")]
    Store(#[from] DatabaseError),
}

impl CatalogError {
    /// Create a not-found error for the given entity name ("Genre", "Movie")
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Create a validation error from accumulated issues
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation(issues)
    }
}
