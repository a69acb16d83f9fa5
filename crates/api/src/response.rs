//! Shared response pieces for API handlers.

use std::collections::BTreeMap;

use trivia_core::pagination::paginate;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;

/// Category id to display name, serialized as a JSON object keyed by the
/// stringified id in ascending id order.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Build the id to display name mapping.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Copy one page window out of an ordered question list.
pub fn question_page(questions: &[Question], page: i64) -> Vec<Question> {
    paginate(questions, page).to_vec()
}
