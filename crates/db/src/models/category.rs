//! Category entity model.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    /// Display name, stored in the `type` column.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
