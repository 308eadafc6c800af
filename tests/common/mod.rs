//! Shared helpers for router integration tests
//!
//! Each test builds its own in-memory catalog and drives the full axum
//! router through `tower::ServiceExt::oneshot`, exercising routing,
//! extraction, validation, and response shaping together.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinedex::db::{Database, SurrealGenreStore, SurrealMovieStore};
use cinedex::server::{create_router, AppState};
use cinedex::services::{GenreService, MovieService};

/// Fresh router over a fresh in-memory store
pub async fn test_app() -> Router {
    let db = Database::connect("mem://").await.unwrap();
    let genre_store = Arc::new(SurrealGenreStore::new(db.clone()));
    let movie_store = Arc::new(SurrealMovieStore::new(db));

    create_router(AppState::new(
        GenreService::new(genre_store.clone()),
        MovieService::new(movie_store, genre_store),
    ))
}

/// Send a request with an optional JSON body and return the raw response
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> Response<axum::body::Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Send a request and return (status, parsed JSON body)
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Collect the `message` fields from a 400 `errors` array
pub fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("expected errors array")
        .iter()
        .map(|issue| issue["message"].as_str().unwrap().to_string())
        .collect()
}
