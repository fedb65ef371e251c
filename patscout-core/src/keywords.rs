//! Keyword list parsing for user edits

use std::collections::HashMap;

use crate::concept::{KeywordCategory, SeedKeywords};
use crate::{Error, Result};

/// Split a comma-separated keyword string into a cleaned list
///
/// Whitespace is trimmed and empty tokens are dropped; order is preserved.
pub fn split_keyword_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a full set of keyword edits, one comma-separated string per category
///
/// All three categories must be present, keyed by [`KeywordCategory::key`].
/// A missing category is a validation error and nothing is parsed.
pub fn parse_keyword_edits(edits: &HashMap<String, String>) -> Result<SeedKeywords> {
    let mut keywords = SeedKeywords::default();

    for category in KeywordCategory::ALL {
        let input = edits.get(category.key()).ok_or_else(|| {
            Error::Validation(format!("missing keyword category: {}", category.key()))
        })?;
        keywords.set(category, split_keyword_list(input));
    }

    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empties() {
        assert_eq!(split_keyword_list("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_preserves_order_and_duplicates() {
        assert_eq!(
            split_keyword_list("filter, membrane, filter"),
            vec!["filter", "membrane", "filter"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_keyword_list("").is_empty());
        assert!(split_keyword_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_edits_complete() {
        let mut edits = HashMap::new();
        edits.insert("problem_purpose".to_string(), "a, b ,, c".to_string());
        edits.insert("object_system".to_string(), "filter".to_string());
        edits.insert("environment_field".to_string(), "home, residential".to_string());

        let keywords = parse_keyword_edits(&edits).unwrap();
        assert_eq!(keywords.problem_purpose, vec!["a", "b", "c"]);
        assert_eq!(keywords.object_system, vec!["filter"]);
        assert_eq!(keywords.environment_field, vec!["home", "residential"]);
    }

    #[test]
    fn test_parse_edits_missing_category() {
        let mut edits = HashMap::new();
        edits.insert("problem_purpose".to_string(), "a".to_string());
        edits.insert("object_system".to_string(), "b".to_string());

        let err = parse_keyword_edits(&edits).unwrap_err();
        assert!(err.to_string().contains("environment_field"));
    }
}
