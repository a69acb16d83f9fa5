//! Route definitions for the `/questions` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// POST   /search      -> search
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::list).post(questions::create))
        .route("/search", post(questions::search))
        .route("/{id}", delete(questions::delete))
}
