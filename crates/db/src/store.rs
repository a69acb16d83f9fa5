//! Storage interface consumed by the HTTP handlers.
//!
//! Handlers receive an `Arc<dyn TriviaStore>` through application state rather
//! than reaching for a global pool, so tests can swap in
//! [`MemoryStore`](crate::memory::MemoryStore).

use async_trait::async_trait;
use trivia_core::types::DbId;

use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question};
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// Read and write operations over categories and questions.
///
/// Every listing is ordered by primary key.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Cheap round trip used by the health endpoint.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, sqlx::Error>;

    /// Exact, case-sensitive match on the category display name.
    async fn find_category_by_type(&self, kind: &str) -> Result<Option<Category>, sqlx::Error>;

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error>;

    async fn count_questions(&self) -> Result<i64, sqlx::Error>;

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, sqlx::Error>;

    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    async fn create_question(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error>;

    /// Returns `true` if a row was removed.
    async fn delete_question(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`TriviaStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        CategoryRepo::list(&self.pool).await
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        CategoryRepo::find_by_id(&self.pool, id).await
    }

    async fn find_category_by_type(&self, kind: &str) -> Result<Option<Category>, sqlx::Error> {
        CategoryRepo::find_by_type(&self.pool, kind).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        QuestionRepo::list(&self.pool).await
    }

    async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        QuestionRepo::count(&self.pool).await
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        QuestionRepo::find_by_id(&self.pool, id).await
    }

    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        QuestionRepo::list_by_category(&self.pool, category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        QuestionRepo::search(&self.pool, term).await
    }

    async fn create_question(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        QuestionRepo::create(&self.pool, input).await
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, sqlx::Error> {
        QuestionRepo::delete(&self.pool, id).await
    }
}
