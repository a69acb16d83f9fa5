//! In-process [`TriviaStore`] keyed by id.
//!
//! Ids are assigned from a monotonically increasing counter per table, the
//! same way a `BIGSERIAL` column behaves: deleted ids are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::search::contains_ignore_case;
use trivia_core::types::DbId;

use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question};
use crate::store::TriviaStore;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
    next_category_id: DbId,
    next_question_id: DbId,
}

impl Tables {
    fn next_id(counter: &mut DbId) -> DbId {
        *counter += 1;
        *counter
    }
}

/// Memory-backed store. Cheap to construct; one per test.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, returning the stored row.
    pub async fn add_category(&self, kind: &str) -> Category {
        let mut tables = self.tables.write().await;
        let id = Tables::next_id(&mut tables.next_category_id);
        let category = Category {
            id,
            kind: kind.to_string(),
        };
        tables.categories.insert(id, category.clone());
        category
    }

    /// Insert a question with an explicit id. Advances the id counter past it.
    pub async fn insert_question(&self, question: Question) {
        let mut tables = self.tables.write().await;
        tables.next_question_id = tables.next_question_id.max(question.id);
        tables.questions.insert(question.id, question);
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn find_category_by_type(&self, kind: &str) -> Result<Option<Category>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .categories
            .values()
            .find(|c| c.kind == kind)
            .cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| contains_ignore_case(&q.question, term))
            .cloned()
            .collect())
    }

    async fn create_question(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let id = Tables::next_id(&mut tables.next_question_id);
        let question = Question {
            id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            category: input.category,
            difficulty: input.difficulty,
        };
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}
