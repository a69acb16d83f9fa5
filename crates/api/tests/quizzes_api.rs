//! HTTP-level tests for `POST /quizzes`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, question};
use serde_json::json;
use trivia_db::memory::MemoryStore;

/// Categories 1-6 plus questions 2, 4 and 6 in "Entertainment" (id 5) and
/// one question in "Science".
async fn quiz_store() -> Arc<MemoryStore> {
    let store = common::categories_only().await;
    store.insert_question(question(1, "What is H2O?", 1)).await;
    store.insert_question(question(2, "Apollo 13 lead actor?", 5)).await;
    store.insert_question(question(4, "Lestat was played by?", 5)).await;
    store.insert_question(question(6, "Edward who?", 5)).await;
    store
}

#[tokio::test]
async fn test_quiz_returns_first_unseen_question() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [2, 4], "quiz_category": "Entertainment"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["id"], 6);
    assert_eq!(json["question"]["category"], 5);
    assert!(json["question"].is_object());
}

#[tokio::test]
async fn test_quiz_without_previous_questions_starts_at_lowest_id() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(app, "/quizzes", json!({"quiz_category": "Entertainment"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["question"]["id"], 2);
}

#[tokio::test]
async fn test_quiz_with_every_question_seen_returns_404() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [2, 4, 6], "quiz_category": "Entertainment"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn test_quiz_with_unknown_category_returns_404() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": "Cooking"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_category_name_is_case_sensitive() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": "entertainment"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_category_without_questions_returns_404() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(
        app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": "Sports"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_without_category_returns_422() {
    let app = common::build_test_app(quiz_store().await);
    let response = post_json(app, "/quizzes", json!({"previous_questions": [2]})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}
