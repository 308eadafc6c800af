//! Genre Endpoints
//!
//! # Endpoints
//!
//! - `POST /api/genres` - Create a genre
//! - `GET /api/genres` - List all genres
//! - `GET /api/genres/:name` - Get a genre by name
//! - `PUT /api/genres/:name` - Replace a genre by name
//! - `DELETE /api/genres/:name` - Delete a genre by name
//!
//! Route parameters are percent-decoded by axum; body-supplied names are
//! decoded here before validation, so `Sci%2DFi` in a JSON body and `Sci-Fi`
//! name the same genre.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::models::{Genre, GenreInput};
use crate::server::percent_decode;
use crate::server::{ApiError, AppState};

/// Create a new genre
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3000/api/genres \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Thriller"}'
/// ```
async fn create_genre(
    State(state): State<AppState>,
    Json(input): Json<GenreInput>,
) -> Result<(StatusCode, Json<Genre>), ApiError> {
    let input = GenreInput {
        name: percent_decode(&input.name),
    };

    let genre = state
        .genres
        .create(input)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error creating genre"))?;

    Ok((StatusCode::CREATED, Json(genre)))
}

/// List all genres (200 with an array, possibly empty, never 404)
async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres = state
        .genres
        .list()
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error getting genres list"))?;

    Ok(Json(genres))
}

/// Get a genre by exact name
async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Genre>, ApiError> {
    let genre = state
        .genres
        .get(&name)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error getting genre"))?;

    Ok(Json(genre))
}

/// Replace a genre by name, returning the post-update record
async fn update_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<GenreInput>,
) -> Result<Json<Genre>, ApiError> {
    let input = GenreInput {
        name: percent_decode(&input.name),
    };

    let genre = state
        .genres
        .update(&name, input)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error updating genre"))?;

    Ok(Json(genre))
}

/// Delete a genre by name (204 on success, 404 when already absent)
async fn delete_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .genres
        .delete(&name)
        .await
        .map_err(|e| ApiError::from_catalog(e, "Error deleting genre"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create router with all genre endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/genres", post(create_genre))
        .route("/api/genres", get(list_genres))
        .route("/api/genres/:name", get(get_genre))
        .route("/api/genres/:name", put(update_genre))
        .route("/api/genres/:name", delete(delete_genre))
        .with_state(state)
}
