//! Genre Store - Persistence for Genre Records
//!
//! Defines the [`GenreStore`] trait and its SurrealDB implementation.
//! All lookups key on the genre `name` (natural key) with case-sensitive
//! exact matching; no normalization is applied.

use crate::db::{Database, DatabaseError};
use crate::models::Genre;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal struct matching the SurrealDB genre document shape
///
/// Records carry their own `uuid` field alongside the native record id,
/// so application-level ids stay plain UUID strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenreRecord {
    uuid: String,
    name: String,
}

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Genre {
            id: record.uuid,
            name: record.name,
        }
    }
}

/// Abstraction layer for genre persistence
///
/// Implementations must be `Send + Sync` for use across async tasks.
/// Query failures are terminal for the current request; no retries happen
/// at this layer.
#[async_trait]
pub trait GenreStore: Send + Sync {
    /// Persist a new genre and return the stored record
    async fn create_genre(&self, name: String) -> Result<Genre, DatabaseError>;

    /// Return all genres (possibly empty)
    async fn list_genres(&self) -> Result<Vec<Genre>, DatabaseError>;

    /// Look up a single genre by exact name
    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, DatabaseError>;

    /// Return every genre whose name is in `names` (single query)
    async fn find_genres_by_names(&self, names: &[String]) -> Result<Vec<Genre>, DatabaseError>;

    /// Replace the genre matching `name`, returning the post-update record,
    /// or `None` when no genre matched. Touches at most one record; under
    /// duplicate names the first match wins.
    async fn update_genre_by_name(
        &self,
        name: &str,
        new_name: String,
    ) -> Result<Option<Genre>, DatabaseError>;

    /// Delete the genre matching `name`, returning the removed record,
    /// or `None` when no genre matched. Touches at most one record; under
    /// duplicate names the first match wins.
    async fn delete_genre_by_name(&self, name: &str) -> Result<Option<Genre>, DatabaseError>;
}

/// SurrealDB-backed [`GenreStore`]
#[derive(Clone)]
pub struct SurrealGenreStore {
    db: Database,
}

impl SurrealGenreStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreStore for SurrealGenreStore {
    async fn create_genre(&self, name: String) -> Result<Genre, DatabaseError> {
        let id = Uuid::new_v4().to_string();

        let mut response = self
            .db
            .client()
            .query("CREATE type::thing('genre', $id) CONTENT { uuid: $id, name: $name };")
            .bind(("id", id))
            .bind(("name", name))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to create genre record", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract created genre", e))?;

        records
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(DatabaseError::missing_record("created genre"))
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM genre;")
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query genre list", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract genre list", e))?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM genre WHERE name = $name LIMIT 1;")
            .bind(("name", name.to_string()))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query genre by name", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract genre", e))?;

        Ok(records.into_iter().map(Into::into).next())
    }

    async fn find_genres_by_names(&self, names: &[String]) -> Result<Vec<Genre>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM genre WHERE name IN $names;")
            .bind(("names", names.to_vec()))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query genres by name set", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract genre name set", e))?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn update_genre_by_name(
        &self,
        name: &str,
        new_name: String,
    ) -> Result<Option<Genre>, DatabaseError> {
        // Resolve the natural key to a single record first; a duplicate name
        // must never fan the write out across records.
        let Some(existing) = self.find_genre_by_name(name).await? else {
            return Ok(None);
        };

        // RETURN AFTER: callers receive the post-update document
        let mut response = self
            .db
            .client()
            .query("UPDATE genre SET name = $new_name WHERE uuid = $uuid RETURN AFTER;")
            .bind(("uuid", existing.id))
            .bind(("new_name", new_name))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to update genre by name", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract updated genre", e))?;

        Ok(records.into_iter().map(Into::into).next())
    }

    async fn delete_genre_by_name(&self, name: &str) -> Result<Option<Genre>, DatabaseError> {
        let Some(existing) = self.find_genre_by_name(name).await? else {
            return Ok(None);
        };

        let mut response = self
            .db
            .client()
            .query("DELETE genre WHERE uuid = $uuid RETURN BEFORE;")
            .bind(("uuid", existing.id))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to delete genre by name", e))?;

        let records: Vec<GenreRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract deleted genre", e))?;

        Ok(records.into_iter().map(Into::into).next())
    }
}
