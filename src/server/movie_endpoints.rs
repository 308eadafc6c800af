//! Movie Endpoints
//!
//! # Endpoints
//!
//! - `POST /api/movies` - Create a movie (validated write path)
//! - `GET /api/movies` - List all movies
//! - `GET /api/movies/:title` - Get a movie by title
//! - `PUT /api/movies/:title` - Replace a movie by title
//! - `DELETE /api/movies/:title` - Delete a movie by title
//! - `GET /api/movies/genre/:genre_name` - List movies referencing a genre
//!
//! The static `/api/movies/genre/..` segment takes precedence over the
//! `:title` parameter, so a movie titled "genre" is only reachable
//! percent-encoded.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::models::{Movie, MovieInput};
use crate::server::percent_decode;
use crate::server::{ApiError, AppState};

/// Create a new movie
///
/// The genre list must reference existing genres; failures from field checks
/// and the referential check come back together in one `errors` array.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3000/api/movies \
///   -H "Content-Type: application/json" \
///   -d '{
///     "title": "Dune",
///     "description": "Spice and sandworms",
///     "releaseDate": "2021-10-22T00:00:00Z",
///     "genre": ["SciFi", "Adventure"]
///   }'
/// ```
async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let input = MovieInput {
        title: percent_decode(&input.title),
        ..input
    };

    let movie = state
        .movies
        .create(input)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error creating movie"))?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// List all movies (200 with an array, possibly empty, never 404)
async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state
        .movies
        .list()
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error getting movie list"))?;

    Ok(Json(movies))
}

/// Get a movie by exact title
async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = state
        .movies
        .get(&title)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error getting movie"))?;

    Ok(Json(movie))
}

/// Replace a movie by title, returning the post-update record
///
/// The lookup key is the route-supplied title; the body may carry a new
/// title, which renames the movie.
async fn update_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(input): Json<MovieInput>,
) -> Result<Json<Movie>, ApiError> {
    let input = MovieInput {
        title: percent_decode(&input.title),
        ..input
    };

    let movie = state
        .movies
        .update(&title, input)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error updating movie"))?;

    Ok(Json(movie))
}

/// Delete a movie by title (204 on success, 404 when already absent)
async fn delete_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .movies
        .delete(&title)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error deleting movie"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// List movies whose genre list contains the given genre name
///
/// 404 when the genre itself does not exist; otherwise 200 with the
/// (possibly empty) matching movies.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/api/movies/genre/Comedy
/// ```
async fn list_movies_by_genre(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state
        .movies
        .list_by_genre(&genre_name)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error searching movies by genre"))?;

    Ok(Json(movies))
}

/// Create router with all movie endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/movies", post(create_movie))
        .route("/api/movies", get(list_movies))
        .route("/api/movies/:title", get(get_movie))
        .route("/api/movies/:title", put(update_movie))
        .route("/api/movies/:title", delete(delete_movie))
        .route("/api/movies/genre/:genre_name", get(list_movies_by_genre))
        .with_state(state)
}
