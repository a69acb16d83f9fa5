//! Fixed-size page windows over ordered result sets.
//!
//! Pages are 1-based. A page that falls outside the data yields an empty
//! window; callers decide whether that is an error.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of questions in one page window.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the request carries no usable `page` parameter.
pub const DEFAULT_PAGE: i64 = 1;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a raw `page` query value.
///
/// Missing or non-integer values fall back to [`DEFAULT_PAGE`]. Integers are
/// passed through unchanged, including zero and negatives.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Slice `[(page - 1) * 10, page * 10)` out of `items`, clipped to bounds.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    let Some(start) = start else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    // -- parse_page ----------------------------------------------------------

    #[test]
    fn parse_page_defaults_when_missing() {
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn parse_page_defaults_when_not_an_integer() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("2.5")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }

    #[test]
    fn parse_page_accepts_integers() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 7 ")), 7);
        assert_eq!(parse_page(Some("0")), 0);
        assert_eq!(parse_page(Some("-2")), -2);
    }

    // -- paginate ------------------------------------------------------------

    #[test]
    fn first_page_holds_ten_items() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 1), &items[0..10]);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 3), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items = numbers(20);
        assert_eq!(paginate(&items, 2).len(), 10);
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 1000).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
    }

    #[test]
    fn non_positive_page_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -1).is_empty());
    }

    #[test]
    fn empty_input_is_empty_on_every_page() {
        let items: Vec<usize> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }
}
