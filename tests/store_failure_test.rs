//! Store-failure injection tests
//!
//! Every store failure must surface as a 500 with the operation's fixed
//! message, never as an unhandled fault, and never leaking the underlying
//! error detail to the client.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use common::send_json;
use serde_json::json;

use cinedex::db::{DatabaseError, GenreStore, MovieStore};
use cinedex::models::{Genre, Movie, MovieUpdate, NewMovie};
use cinedex::server::{create_router, AppState};
use cinedex::services::{GenreService, MovieService};

struct FailingGenreStore;

#[async_trait]
impl GenreStore for FailingGenreStore {
    async fn create_genre(&self, _name: String) -> Result<Genre, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
    async fn list_genres(&self) -> Result<Vec<Genre>, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
    async fn find_genre_by_name(&self, _name: &str) -> Result<Option<Genre>, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
    async fn find_genres_by_names(&self, _names: &[String]) -> Result<Vec<Genre>, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
    async fn update_genre_by_name(
        &self,
        _name: &str,
        _new_name: String,
    ) -> Result<Option<Genre>, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
    async fn delete_genre_by_name(&self, _name: &str) -> Result<Option<Genre>, DatabaseError> {
        Err(DatabaseError::malformed_record("genre", "injected store failure"))
    }
}

struct FailingMovieStore;

#[async_trait]
impl MovieStore for FailingMovieStore {
    async fn create_movie(&self, _movie: NewMovie) -> Result<Movie, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
    async fn list_movies(&self) -> Result<Vec<Movie>, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
    async fn find_movie_by_title(&self, _title: &str) -> Result<Option<Movie>, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
    async fn update_movie_by_title(
        &self,
        _title: &str,
        _movie: MovieUpdate,
    ) -> Result<Option<Movie>, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
    async fn delete_movie_by_title(&self, _title: &str) -> Result<Option<Movie>, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
    async fn find_movies_by_genre(&self, _genre_name: &str) -> Result<Vec<Movie>, DatabaseError> {
        Err(DatabaseError::malformed_record("movie", "injected store failure"))
    }
}

fn failing_app() -> Router {
    let genre_store = Arc::new(FailingGenreStore);
    let movie_store = Arc::new(FailingMovieStore);
    create_router(AppState::new(
        GenreService::new(genre_store.clone()),
        MovieService::new(movie_store, genre_store),
    ))
}

#[tokio::test]
async fn test_genre_operations_return_fixed_500_messages() {
    let app = failing_app();

    let cases = [
        ("POST", "/api/genres", Some(json!({"name": "Drama"})), "Error creating genre"),
        ("GET", "/api/genres", None, "Error getting genres list"),
        ("GET", "/api/genres/Drama", None, "Error getting genre"),
        ("PUT", "/api/genres/Drama", Some(json!({"name": "Drama"})), "Error updating genre"),
        ("DELETE", "/api/genres/Drama", None, "Error deleting genre"),
    ];

    for (method, uri, body, message) in cases {
        let (status, json) = send_json(&app, method, uri, body).await;
        assert_eq!(status, 500, "{method} {uri}");
        assert_eq!(json, serde_json::json!({"error": message}), "{method} {uri}");
    }
}

#[tokio::test]
async fn test_movie_operations_return_fixed_500_messages() {
    let app = failing_app();

    let movie_body = json!({
        "title": "Dune",
        "description": "Spice",
        "genre": ["SciFi"]
    });

    let cases = [
        // Create fails inside the referential check, still the create message
        ("POST", "/api/movies", Some(movie_body.clone()), "Error creating movie"),
        ("GET", "/api/movies", None, "Error getting movie list"),
        ("GET", "/api/movies/Dune", None, "Error getting movie"),
        ("PUT", "/api/movies/Dune", Some(movie_body), "Error updating movie"),
        ("DELETE", "/api/movies/Dune", None, "Error deleting movie"),
        ("GET", "/api/movies/genre/SciFi", None, "Error searching movies by genre"),
    ];

    for (method, uri, body, message) in cases {
        let (status, json) = send_json(&app, method, uri, body).await;
        assert_eq!(status, 500, "{method} {uri}");
        assert_eq!(json, serde_json::json!({"error": message}), "{method} {uri}");
    }
}

#[tokio::test]
async fn test_validation_still_runs_before_store_access() {
    // A payload that fails shape validation never reaches the failing store
    let app = failing_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/movies",
        Some(json!({"title": "Dune", "description": "Spice", "genre": "SciFi"})),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["errors"][0]["message"],
        "Genre must be an array of strings"
    );
}
