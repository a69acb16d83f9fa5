pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                     list (GET)
/// /categories/{id}/questions      questions in one category (GET)
///
/// /questions                      paginated list (GET), create (POST)
/// /questions/{id}                 delete (DELETE)
/// /questions/search               free-text search (POST)
///
/// /quizzes                        next unseen quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/questions", questions::router())
        .nest("/quizzes", quizzes::router())
}
