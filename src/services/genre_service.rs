//! Genre Service - CRUD Orchestration for Genres
//!
//! Each operation follows the same shape: validate (where applicable),
//! delegate to the store, map an absent record to `NotFound`. Inputs arrive
//! already percent-decoded from the HTTP layer.

use crate::db::GenreStore;
use crate::models::{Genre, GenreInput};
use crate::services::error::CatalogError;
use crate::services::validation::validate_genre_input;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct GenreService {
    store: Arc<dyn GenreStore>,
}

impl GenreService {
    pub fn new(store: Arc<dyn GenreStore>) -> Self {
        Self { store }
    }

    /// Create a genre from a validated payload
    pub async fn create(&self, input: GenreInput) -> Result<Genre, CatalogError> {
        let issues = validate_genre_input(&input);
        if !issues.is_empty() {
            return Err(CatalogError::validation(issues));
        }

        let genre = self.store.create_genre(input.name).await?;
        debug!("Created genre '{}' ({})", genre.name, genre.id);
        Ok(genre)
    }

    /// List all genres; always an array, possibly empty
    pub async fn list(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(self.store.list_genres().await?)
    }

    /// Fetch a genre by exact name
    pub async fn get(&self, name: &str) -> Result<Genre, CatalogError> {
        self.store
            .find_genre_by_name(name)
            .await?
            .ok_or(CatalogError::not_found("Genre"))
    }

    /// Replace the genre matching `name`, returning the post-update record
    pub async fn update(&self, name: &str, input: GenreInput) -> Result<Genre, CatalogError> {
        let issues = validate_genre_input(&input);
        if !issues.is_empty() {
            return Err(CatalogError::validation(issues));
        }

        self.store
            .update_genre_by_name(name, input.name)
            .await?
            .ok_or(CatalogError::not_found("Genre"))
    }

    /// Delete the genre matching `name`
    ///
    /// Movies referencing the deleted name keep it in their genre lists;
    /// the reference is weak by design.
    pub async fn delete(&self, name: &str) -> Result<(), CatalogError> {
        let deleted = self.store.delete_genre_by_name(name).await?;
        match deleted {
            Some(genre) => {
                debug!("Deleted genre '{}' ({})", genre.name, genre.id);
                Ok(())
            }
            None => Err(CatalogError::not_found("Genre")),
        }
    }
}
