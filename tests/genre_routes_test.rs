//! Integration tests for the genre routes
//!
//! Tests cover:
//! - Create/read/update/delete over natural keys
//! - Percent-decoding of route parameters and body names
//! - Status codes for validation failures and missing records
//! - Health check

mod common;

use common::{error_messages, send, send_json, test_app};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = send_json(&app, "GET", "/health-check", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "Server is running");
}

#[tokio::test]
async fn test_create_genre_returns_201_with_record() {
    let app = test_app().await;

    let (status, body) =
        send_json(&app, "POST", "/api/genres", Some(json!({"name": "Thriller"}))).await;

    assert_eq!(status, 201);
    assert_eq!(body["name"], "Thriller");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_create_genre_decodes_body_name() {
    let app = test_app().await;

    let (status, body) =
        send_json(&app, "POST", "/api/genres", Some(json!({"name": "Sci%2DFi"}))).await;

    assert_eq!(status, 201);
    assert_eq!(body["name"], "Sci-Fi");
}

#[tokio::test]
async fn test_create_genre_empty_name_is_400() {
    let app = test_app().await;

    let (status, body) = send_json(&app, "POST", "/api/genres", Some(json!({"name": ""}))).await;
    assert_eq!(status, 400);
    assert_eq!(error_messages(&body), vec!["Genre name required"]);

    // Missing field behaves the same as empty
    let (status, body) = send_json(&app, "POST", "/api/genres", Some(json!({}))).await;
    assert_eq!(status, 400);
    assert_eq!(error_messages(&body), vec!["Genre name required"]);
}

#[tokio::test]
async fn test_list_genres_is_always_an_array() {
    let app = test_app().await;

    let (status, body) = send_json(&app, "GET", "/api/genres", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Drama"}))).await;

    let (status, body) = send_json(&app, "GET", "/api/genres", None).await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_genre_round_trip() {
    let app = test_app().await;
    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Thriller"}))).await;

    let (status, body) = send_json(&app, "GET", "/api/genres/Thriller", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Thriller");
}

#[tokio::test]
async fn test_get_genre_decodes_route_param() {
    let app = test_app().await;
    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Film Noir"}))).await;

    let (status, body) = send_json(&app, "GET", "/api/genres/Film%20Noir", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Film Noir");
}

#[tokio::test]
async fn test_get_missing_genre_is_404() {
    let app = test_app().await;
    let (status, body) = send_json(&app, "GET", "/api/genres/Nope", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"error": "Genre not found"}));
}

#[tokio::test]
async fn test_update_genre_returns_post_update_record() {
    let app = test_app().await;
    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Drma"}))).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/genres/Drma",
        Some(json!({"name": "Drama"})),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["name"], "Drama");

    let (status, _) = send_json(&app, "GET", "/api/genres/Drma", None).await;
    assert_eq!(status, 404);
    let (status, _) = send_json(&app, "GET", "/api/genres/Drama", None).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_update_missing_genre_is_404() {
    let app = test_app().await;
    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/genres/Nope",
        Some(json!({"name": "Drama"})),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Genre not found");
}

#[tokio::test]
async fn test_update_genre_with_empty_name_is_400() {
    let app = test_app().await;
    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Drama"}))).await;

    let (status, body) = send_json(&app, "PUT", "/api/genres/Drama", Some(json!({"name": ""}))).await;
    assert_eq!(status, 400);
    assert_eq!(error_messages(&body), vec!["Genre name required"]);
}

#[tokio::test]
async fn test_delete_genre_is_204_then_404() {
    let app = test_app().await;
    send_json(&app, "POST", "/api/genres", Some(json!({"name": "Western"}))).await;

    let response = send(&app, "DELETE", "/api/genres/Western", None).await;
    assert_eq!(response.status(), 204);

    // Repeating the delete on an already-deleted key is 404, not 204
    let (status, body) = send_json(&app, "DELETE", "/api/genres/Western", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Genre not found");
}
