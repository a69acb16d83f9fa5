//! Free-text search helpers.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` wildcards so `term` matches as a literal substring.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%term%` pattern for a case-insensitive substring match.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Case-insensitive substring test with the same semantics as the SQL
/// `ILIKE` pattern produced by [`contains_pattern`].
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_terms_are_untouched() {
        assert_eq!(escape_like("Hematology"), "Hematology");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }

    #[test]
    fn pattern_wraps_escaped_term() {
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ignore_case("What is Hematology?", "hEMATOLOGY"));
        assert!(!contains_ignore_case("What is Hematology?", "biology"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_ignore_case("anything", ""));
    }
}
