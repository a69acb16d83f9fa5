//! Shared query parameter types for API handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use trivia_core::pagination::parse_page;

/// Page selection (`?page=`).
///
/// Extracted directly from the request URI and never rejects: a missing,
/// repeated or non-integer `page` falls back the same way
/// [`parse_page`] does. When `page` repeats, the first value wins.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested 1-based page number.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }

    /// First `page` value of a URL-encoded query string.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Self { page }
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unparseable query string");
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}
