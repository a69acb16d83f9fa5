//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! store is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use trivia_api::error::AppError;
use trivia_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_uniform_404_body() {
    let (status, json) = error_to_response(AppError::NotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn core_not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Question",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn unprocessable_hides_detail() {
    let err = AppError::Unprocessable("column category is of type bigint".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        serde_json::json!({"success": false, "error": 422, "message": "unprocessable"})
    );
}

#[tokio::test]
async fn validation_error_returns_422() {
    let err = AppError::Core(CoreError::Validation("answer must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_return_sanitized_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 500);
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn database_error_detail_is_not_leaked() {
    let err = AppError::Database(sqlx::Error::Configuration(
        "password=secret for postgres://trivia".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !json.to_string().contains("secret"),
        "500 response must not leak database error details"
    );
}

#[test]
fn into_unprocessable_collapses_every_variant() {
    assert_matches!(AppError::NotFound.into_unprocessable(), AppError::Unprocessable(_));
    assert_matches!(
        AppError::Database(sqlx::Error::PoolClosed).into_unprocessable(),
        AppError::Unprocessable(_)
    );
    assert_matches!(
        AppError::Unprocessable("kept".into()).into_unprocessable(),
        AppError::Unprocessable(msg) if msg == "kept"
    );
}
