//! Handler for the `/quizzes` resource.
//!
//! Picks the next question for a quiz round: the first question of the named
//! category, in id order, that the client has not seen yet.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use trivia_core::types::DbId;
use trivia_db::models::question::Question;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this round.
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    /// Category display name, matched exactly.
    pub quiz_category: String,
}

/// Response of `POST /quizzes`.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// First question not contained in `previous`, preserving input order.
pub fn first_unseen(questions: Vec<Question>, previous: &[DbId]) -> Option<Question> {
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    questions.into_iter().find(|q| !seen.contains(&q.id))
}

/// POST /quizzes
///
/// Resolves the category by name, then its questions. A category with no
/// questions is reported as 404, the same as an unknown name, and so is a
/// round in which every question has been seen.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    let category = state
        .store
        .find_category_by_type(&input.quiz_category)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = state.store.list_questions_by_category(category.id).await?;
    if questions.is_empty() {
        tracing::debug!(category_id = category.id, "Quiz category has no questions");
        return Err(AppError::NotFound);
    }

    let question = first_unseen(questions, &input.previous_questions).ok_or(AppError::NotFound)?;

    tracing::debug!(
        category_id = category.id,
        question_id = question.id,
        seen = input.previous_questions.len(),
        "Quiz question selected",
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
