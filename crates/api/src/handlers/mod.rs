//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`TriviaStore`](trivia_db::store::TriviaStore) in
//! application state and map errors via [`AppError`](crate::error::AppError).

pub mod categories;
pub mod questions;
pub mod quizzes;
