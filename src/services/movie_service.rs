//! Movie Service - The Validated Write Path
//!
//! Movie create/update runs an ordered pipeline of checks before touching
//! the movie collection:
//!
//! 1. Field presence (title, description)
//! 2. Genre list shape (non-empty array of strings)
//! 3. Referential check (every name resolves to an existing genre)
//!
//! Failures from all stages accumulate into one combined issue list, so the
//! client sees every problem at once rather than the first one found.

use crate::db::{GenreStore, MovieStore};
use crate::models::{Movie, MovieInput, MovieUpdate, NewMovie};
use crate::services::error::CatalogError;
use crate::services::validation::{
    parse_genre_list, validate_movie_fields, GenreListShape, GenreReferenceValidator,
    GENRE_LIST_SHAPE, MOVIE_GENRE_REQUIRED,
};
use crate::services::ValidationIssue;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct MovieService {
    movies: Arc<dyn MovieStore>,
    genres: Arc<dyn GenreStore>,
    validator: GenreReferenceValidator,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieStore>, genres: Arc<dyn GenreStore>) -> Self {
        let validator = GenreReferenceValidator::new(genres.clone());
        Self {
            movies,
            genres,
            validator,
        }
    }

    /// Run the full validation pipeline over a movie payload
    ///
    /// Returns the parsed genre names on success. The referential check only
    /// runs when the list shape is valid; a store failure during that check
    /// is a `Store` error (500), never a validation issue.
    async fn validate(&self, input: &MovieInput) -> Result<Vec<String>, CatalogError> {
        let mut issues = validate_movie_fields(input);
        let mut genre_names = Vec::new();

        match parse_genre_list(&input.genre) {
            GenreListShape::Missing => {
                issues.push(ValidationIssue::new("genre", MOVIE_GENRE_REQUIRED));
            }
            GenreListShape::Malformed => {
                issues.push(ValidationIssue::new("genre", GENRE_LIST_SHAPE));
            }
            GenreListShape::Names(names) => {
                if let Some(issue) = self.validator.check(&names).await? {
                    issues.push(issue);
                }
                genre_names = names;
            }
        }

        if issues.is_empty() {
            Ok(genre_names)
        } else {
            Err(CatalogError::validation(issues))
        }
    }

    /// Create a movie from a validated payload
    ///
    /// The release date defaults to "now" at persistence time when the caller
    /// did not supply one. This default is applied here once; updates never
    /// re-apply it.
    pub async fn create(&self, input: MovieInput) -> Result<Movie, CatalogError> {
        let genre = self.validate(&input).await?;

        let movie = self
            .movies
            .create_movie(NewMovie {
                title: input.title,
                description: input.description,
                release_date: input.release_date.unwrap_or_else(Utc::now),
                genre,
            })
            .await?;

        debug!("Created movie '{}' ({})", movie.title, movie.id);
        Ok(movie)
    }

    /// List all movies; always an array, possibly empty
    pub async fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.list_movies().await?)
    }

    /// Fetch a movie by exact title
    pub async fn get(&self, title: &str) -> Result<Movie, CatalogError> {
        self.movies
            .find_movie_by_title(title)
            .await?
            .ok_or(CatalogError::not_found("Movie"))
    }

    /// Replace the movie matching `title`, returning the post-update record
    ///
    /// An omitted release date leaves the stored one untouched.
    pub async fn update(&self, title: &str, input: MovieInput) -> Result<Movie, CatalogError> {
        let genre = self.validate(&input).await?;

        self.movies
            .update_movie_by_title(
                title,
                MovieUpdate {
                    title: input.title,
                    description: input.description,
                    release_date: input.release_date,
                    genre,
                },
            )
            .await?
            .ok_or(CatalogError::not_found("Movie"))
    }

    /// Delete the movie matching `title`
    pub async fn delete(&self, title: &str) -> Result<(), CatalogError> {
        let deleted = self.movies.delete_movie_by_title(title).await?;
        match deleted {
            Some(movie) => {
                debug!("Deleted movie '{}' ({})", movie.title, movie.id);
                Ok(())
            }
            None => Err(CatalogError::not_found("Movie")),
        }
    }

    /// List movies whose genre list contains `genre_name`
    ///
    /// The genre must exist; an unknown name is a `Genre` not-found, even
    /// though the result for an existing genre may still be empty.
    pub async fn list_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, CatalogError> {
        self.genres
            .find_genre_by_name(genre_name)
            .await?
            .ok_or(CatalogError::not_found("Genre"))?;

        Ok(self.movies.find_movies_by_genre(genre_name).await?)
    }
}

#[cfg(test)]
#[path = "movie_service_test.rs"]
mod movie_service_test;
