//! SQL repositories, one per table.
//!
//! Repositories are zero-sized structs with associated async functions that
//! take a `&PgPool` and return `sqlx::Error` unchanged.

pub mod category_repo;
pub mod question_repo;

pub use category_repo::CategoryRepo;
pub use question_repo::QuestionRepo;
