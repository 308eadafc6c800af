//! Movie Store - Persistence for Movie Records
//!
//! Defines the [`MovieStore`] trait and its SurrealDB implementation.
//! Lookups key on the movie `title` (natural key), case-sensitive exact
//! match. The `genre` field is stored as a plain array of genre names;
//! genre-filtered listing is a containment query over that array.

use crate::db::{Database, DatabaseError};
use crate::models::{Movie, MovieUpdate, NewMovie};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal struct matching the SurrealDB movie document shape
///
/// Timestamps are stored as RFC 3339 strings to keep the document readable
/// and engine-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovieRecord {
    uuid: String,
    title: String,
    description: String,
    release_date: String,
    genre: Vec<String>,
}

impl TryFrom<MovieRecord> for Movie {
    type Error = DatabaseError;

    /// A stored release date that fails to parse is a malformed record,
    /// surfaced as an error rather than silently rewritten.
    fn try_from(record: MovieRecord) -> Result<Self, DatabaseError> {
        let release_date = DateTime::parse_from_rfc3339(&record.release_date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DatabaseError::malformed_record(
                    "movie",
                    format!("unparseable release_date '{}': {e}", record.release_date),
                )
            })?;

        Ok(Movie {
            id: record.uuid,
            title: record.title,
            description: record.description,
            release_date,
            genre: record.genre,
        })
    }
}

fn into_movies(records: Vec<MovieRecord>) -> Result<Vec<Movie>, DatabaseError> {
    records.into_iter().map(Movie::try_from).collect()
}

fn into_movie(records: Vec<MovieRecord>) -> Result<Option<Movie>, DatabaseError> {
    records.into_iter().next().map(Movie::try_from).transpose()
}

/// Abstraction layer for movie persistence
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie and return the stored record
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, DatabaseError>;

    /// Return all movies (possibly empty)
    async fn list_movies(&self) -> Result<Vec<Movie>, DatabaseError>;

    /// Look up a single movie by exact title
    async fn find_movie_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError>;

    /// Replace the movie matching `title`, returning the post-update record,
    /// or `None` when no movie matched. A `None` release date in the update
    /// leaves the stored release date untouched. Touches at most one record;
    /// under duplicate titles the first match wins.
    async fn update_movie_by_title(
        &self,
        title: &str,
        movie: MovieUpdate,
    ) -> Result<Option<Movie>, DatabaseError>;

    /// Delete the movie matching `title`, returning the removed record,
    /// or `None` when no movie matched. Touches at most one record; under
    /// duplicate titles the first match wins.
    async fn delete_movie_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError>;

    /// Return every movie whose genre list contains `genre_name`
    async fn find_movies_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DatabaseError>;
}

/// SurrealDB-backed [`MovieStore`]
#[derive(Clone)]
pub struct SurrealMovieStore {
    db: Database,
}

impl SurrealMovieStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieStore for SurrealMovieStore {
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, DatabaseError> {
        let id = Uuid::new_v4().to_string();

        let query = "
            CREATE type::thing('movie', $id) CONTENT {
                uuid: $id,
                title: $title,
                description: $description,
                release_date: $release_date,
                genre: $genre
            };
        ";

        let mut response = self
            .db
            .client()
            .query(query)
            .bind(("id", id))
            .bind(("title", movie.title))
            .bind(("description", movie.description))
            .bind(("release_date", movie.release_date.to_rfc3339()))
            .bind(("genre", movie.genre))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to create movie record", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract created movie", e))?;

        into_movie(records)?.ok_or(DatabaseError::missing_record("created movie"))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM movie;")
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query movie list", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract movie list", e))?;

        into_movies(records)
    }

    async fn find_movie_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM movie WHERE title = $title LIMIT 1;")
            .bind(("title", title.to_string()))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query movie by title", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract movie", e))?;

        into_movie(records)
    }

    async fn update_movie_by_title(
        &self,
        title: &str,
        movie: MovieUpdate,
    ) -> Result<Option<Movie>, DatabaseError> {
        // Resolve the natural key to a single record first; a duplicate title
        // must never fan the write out across records.
        let Some(existing) = self.find_movie_by_title(title).await? else {
            return Ok(None);
        };

        // Two query shapes: the release date is only written when the caller
        // supplied one, so the creation-time default survives updates.
        let query = if movie.release_date.is_some() {
            "UPDATE movie SET
                title = $new_title,
                description = $description,
                release_date = $release_date,
                genre = $genre
            WHERE uuid = $uuid RETURN AFTER;"
        } else {
            "UPDATE movie SET
                title = $new_title,
                description = $description,
                genre = $genre
            WHERE uuid = $uuid RETURN AFTER;"
        };

        let mut request = self
            .db
            .client()
            .query(query)
            .bind(("uuid", existing.id))
            .bind(("new_title", movie.title))
            .bind(("description", movie.description))
            .bind(("genre", movie.genre));

        if let Some(release_date) = movie.release_date {
            request = request.bind(("release_date", release_date.to_rfc3339()));
        }

        let mut response = request
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to update movie by title", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract updated movie", e))?;

        into_movie(records)
    }

    async fn delete_movie_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError> {
        let Some(existing) = self.find_movie_by_title(title).await? else {
            return Ok(None);
        };

        let mut response = self
            .db
            .client()
            .query("DELETE movie WHERE uuid = $uuid RETURN BEFORE;")
            .bind(("uuid", existing.id))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to delete movie by title", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract deleted movie", e))?;

        into_movie(records)
    }

    async fn find_movies_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DatabaseError> {
        let mut response = self
            .db
            .client()
            .query("SELECT * FROM movie WHERE genre CONTAINS $name;")
            .bind(("name", genre_name.to_string()))
            .await
            .map_err(|e| DatabaseError::query_failed("Failed to query movies by genre", e))?;

        let records: Vec<MovieRecord> = response
            .take(0)
            .map_err(|e| DatabaseError::query_failed("Failed to extract movies by genre", e))?;

        into_movies(records)
    }
}
