//! Handlers for the `/questions` resource.
//!
//! Every list returned here is a page window selected by `?page=`
//! (see [`PageParams`]).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::models::question::{CreateQuestion, Question};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::PageParams;
use crate::response::{category_map, question_page, CategoryMap};
use crate::state::AppState;

/// Category whose name is reported as `current_category` on the main list.
const DEFAULT_CURRENT_CATEGORY: DbId = 1;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Name of category 1, or `null` when it does not exist.
    pub current_category: Option<String>,
}

/// Body of `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: DbId,
    pub questions: Vec<Question>,
    /// Rows remaining after the delete.
    pub total_questions: i64,
}

/// Body of `POST /questions`. The question text is not echoed back.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub questions: Vec<Question>,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
    pub id: DbId,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response of `POST /questions/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    /// Full match count, not the size of the page window.
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /questions?page=N
///
/// 404 when the page window is empty. An out-of-range page and an empty
/// store are the same condition here.
pub async fn list(
    State(state): State<AppState>,
    params: PageParams,
) -> AppResult<Json<QuestionListResponse>> {
    let all = state.store.list_questions().await?;
    let questions = question_page(&all, params.page());
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = category_map(state.store.list_categories().await?);
    let current_category = categories.get(&DEFAULT_CURRENT_CATEGORY).cloned();

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories,
        current_category,
    }))
}

/// DELETE /questions/{id}?page=N
///
/// Every failure, including an unknown id, is reported as 422.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    params: PageParams,
) -> AppResult<Json<DeleteQuestionResponse>> {
    delete_and_list(&state, id, params.page())
        .await
        .map_err(|err| {
            tracing::warn!(question_id = id, error = %err, "Question delete failed");
            err.into_unprocessable()
        })
}

async fn delete_and_list(
    state: &AppState,
    id: DbId,
    page: i64,
) -> AppResult<Json<DeleteQuestionResponse>> {
    let question = state
        .store
        .find_question(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    if !state.store.delete_question(question.id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }
    tracing::info!(question_id = id, "Question deleted");

    let remaining = state.store.list_questions().await?;
    let total_questions = state.store.count_questions().await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        questions: question_page(&remaining, page),
        total_questions,
    }))
}

/// POST /questions?page=N
///
/// Malformed bodies, failed validation and failed writes are all 422. The
/// store is untouched unless the body is fully valid.
pub async fn create(
    State(state): State<AppState>,
    params: PageParams,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<Json<CreateQuestionResponse>> {
    create_and_list(&state, &input, params.page())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Question create failed");
            err.into_unprocessable()
        })
}

async fn create_and_list(
    state: &AppState,
    input: &CreateQuestion,
    page: i64,
) -> AppResult<Json<CreateQuestionResponse>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let question = state.store.create_question(input).await?;
    tracing::info!(
        question_id = question.id,
        category = question.category,
        "Question created"
    );

    let all = state.store.list_questions().await?;

    Ok(Json(CreateQuestionResponse {
        questions: question_page(&all, page),
        answer: question.answer,
        difficulty: question.difficulty,
        category: question.category,
        id: question.id,
    }))
}

/// POST /questions/search?page=N
///
/// Case-insensitive substring match on the question text. 404 on zero
/// matches.
pub async fn search(
    State(state): State<AppState>,
    params: PageParams,
    AppJson(input): AppJson<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    let matches = state.store.search_questions(&input.search_term).await?;
    if matches.is_empty() {
        return Err(AppError::NotFound);
    }

    tracing::debug!(
        term = %input.search_term,
        results = matches.len(),
        "Search executed"
    );

    Ok(Json(SearchResponse {
        questions: question_page(&matches, params.page()),
        total_questions: matches.len(),
    }))
}
