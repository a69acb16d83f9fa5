//! Repository for the `categories` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::category::Category;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type";

/// Read-only access to categories. Rows are seeded outside the API.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by exact display name.
    ///
    /// When several rows share a name the lowest id wins.
    pub async fn find_by_type(pool: &PgPool, kind: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE type = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Category>(&query)
            .bind(kind)
            .fetch_optional(pool)
            .await
    }
}
