//! HTTP Server Layer
//!
//! REST surface for the catalog, organized into modular per-entity endpoint
//! modules merged into a single router:
//!
//! - `genre_endpoints` - Genre CRUD
//! - `movie_endpoints` - Movie CRUD plus genre-filtered listing
//! - `http_error` - Shared error-to-response mapping
//!
//! Each inbound request is handled independently; the only process-wide
//! state is the store connection inside [`AppState`], established once at
//! startup. No locking happens here; consistency is delegated to the store's
//! per-document atomicity.

use axum::{response::Json, routing::get, Router};
use percent_encoding::percent_decode_str;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

mod genre_endpoints;
mod http_error;
mod movie_endpoints;

pub use http_error::ApiError;

use crate::services::{GenreService, MovieService};

/// Application state shared across all endpoints
///
/// Services are cheap to clone (shared `Arc` stores inside); axum clones the
/// state per request.
#[derive(Clone)]
pub struct AppState {
    pub genres: GenreService,
    pub movies: MovieService,
}

impl AppState {
    pub fn new(genres: GenreService, movies: MovieService) -> Self {
        Self { genres, movies }
    }
}

/// Percent-decode a body-supplied natural key
///
/// Route parameters are already decoded by axum's `Path` extractor; this
/// covers keys arriving inside JSON bodies. Invalid UTF-8 after decoding
/// falls back to lossy replacement rather than rejecting the request.
pub(crate) fn percent_decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Liveness endpoint, exempt from the `/api` prefix
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "Server is running" }))
}

/// Create the main application router with all endpoint modules
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(genre_endpoints::routes(state.clone()))
        .merge(movie_endpoints::routes(state))
        .route("/health-check", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and serve until shutdown
///
/// # Errors
///
/// Returns error if the listener fails to bind or the server loop fails.
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Catalog server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
