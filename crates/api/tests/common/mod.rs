#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use trivia_api::config::ServerConfig;
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_db::memory::MemoryStore;
use trivia_db::models::question::Question;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs` so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

/// The six standard categories, ids 1 through 6.
pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// A store holding only the standard categories.
pub async fn categories_only() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    for name in CATEGORIES {
        store.add_category(name).await;
    }
    Arc::new(store)
}

/// A store holding the standard categories and `count` questions with ids
/// `1..=count`, spread round-robin over categories 1 to 4.
pub async fn seeded_store(count: i64) -> Arc<MemoryStore> {
    let store = categories_only().await;
    for id in 1..=count {
        store
            .insert_question(question(id, &format!("Question number {id}?"), (id - 1) % 4 + 1))
            .await;
    }
    store
}

/// Build a question row.
pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("Answer {id}"),
        category,
        difficulty: 2,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the `questions` array in a response body.
pub fn question_ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
