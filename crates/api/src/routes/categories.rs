//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                    -> list
/// GET    /{id}/questions      -> list_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list))
        .route("/{id}/questions", get(categories::list_questions))
}
