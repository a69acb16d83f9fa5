//! Route definitions for the `/quizzes` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// Routes mounted at `/quizzes`.
///
/// ```text
/// POST   /            -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(quizzes::next_question))
}
