//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::question::Question;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::{category_map, CategoryMap};
use crate::state::AppState;

/// Body of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Body of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories
///
/// All categories as an id to name map. Succeeds on an empty store.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.store.list_categories().await?;
    let total_categories = categories.len();

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    }))
}

/// GET /categories/{id}/questions
///
/// Every question in the category, unpaginated. 404 if the category does not
/// exist; an existing category with no questions is an empty success.
pub async fn list_questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<CategoryQuestionsResponse>> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = state.store.list_questions_by_category(category.id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}
