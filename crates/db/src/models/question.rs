//! Question entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::types::DbId;
use validator::Validate;

use crate::models::coerce;

/// A row from the `questions` table.
///
/// Serializes to the public question object
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// Expected to reference `categories.id`; not enforced.
    pub category: DbId,
    pub difficulty: i32,
}

/// DTO for creating a new question. Every field is required.
///
/// `category` and `difficulty` take an integer or a numeric string, so
/// `{"category": "1"}` is accepted while `{"category": "cat1"}` is rejected
/// during deserialization before any write reaches the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[serde(deserialize_with = "coerce::integer")]
    pub category: DbId,
    #[serde(deserialize_with = "coerce::integer")]
    pub difficulty: i32,
}
