use std::sync::Arc;

use trivia_db::store::TriviaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Category and question storage.
    pub store: Arc<dyn TriviaStore>,
}
