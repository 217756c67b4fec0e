// datasift-core/src/extraction_match.rs
//! Result types produced by the extraction pipeline.
//!
//! [`ExtractionResult`] is the mapping handed back to callers. [`ExtractionMatch`] and
//! [`ExtractionSummaryItem`] carry the per-match and per-category detail used for
//! reporting.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::category::Category;

/// A single surviving match, before it is flattened into an [`ExtractionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMatch {
    pub category: Category,
    /// The matched text as it appears in the sanitized input.
    pub original: String,
    /// The value reported to callers; masked for sensitive categories.
    pub output: String,
    /// Byte offset of the match start in the sanitized input.
    pub start: usize,
    /// Byte offset one past the match end in the sanitized input.
    pub end: usize,
    /// SHA-256 of `category:original`, for correlating matches without the raw value.
    pub sample_hash: String,
}

impl ExtractionMatch {
    pub fn new(category: Category, original: &str, output: String, start: usize, end: usize) -> Self {
        Self {
            category,
            original: original.to_string(),
            output,
            start,
            end,
            sample_hash: sample_hash(category, original),
        }
    }
}

/// Hashes a matched value together with its category.
pub fn sample_hash(category: Category, snippet: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(category.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(snippet.as_bytes());
    hex::encode(hasher.finalize())
}

/// Per-category statistics for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummaryItem {
    pub category: Category,
    /// Values reported for the category.
    pub occurrences: usize,
    /// Pattern matches discarded by the post-filter or validator.
    pub dropped: usize,
}

/// Mapping from every category to its ordered output values.
///
/// All four categories are always present; a category with no surviving matches maps
/// to an empty sequence. Iteration and serialization follow the fixed category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    values: BTreeMap<Category, Vec<String>>,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            values: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a result from individual matches, preserving their order per category.
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a ExtractionMatch>,
    {
        let mut result = Self::new();
        for m in matches {
            result.push(m.category, m.output.clone());
        }
        result
    }

    /// Appends a value to a category.
    pub fn push(&mut self, category: Category, value: String) {
        self.values.entry(category).or_default().push(value);
    }

    /// The values for `category`, in order of appearance.
    pub fn get(&self, category: Category) -> &[String] {
        self.values.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates categories in the fixed order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.values.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Total number of values across all categories.
    pub fn total(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Serializes to a pretty-printed JSON object with the four category keys.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_has_every_key_and_no_values() {
        let result = ExtractionResult::new();
        assert!(result.is_empty());
        let keys: Vec<Category> = result.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, Category::ALL.to_vec());
    }

    #[test]
    fn json_keeps_fixed_key_order_and_empty_arrays() {
        let mut result = ExtractionResult::new();
        result.push(Category::Currency, "$1.00".to_string());
        result.push(Category::Phone, "555.987.6543".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"phone":["555.987.6543"],"credit_card":[],"hashtag":[],"currency":["$1.00"]}"#
        );
    }

    #[test]
    fn from_matches_preserves_duplicates_in_order() {
        let matches = vec![
            ExtractionMatch::new(Category::Hashtag, "#a", "#a".into(), 0, 2),
            ExtractionMatch::new(Category::Hashtag, "#b", "#b".into(), 3, 5),
            ExtractionMatch::new(Category::Hashtag, "#a", "#a".into(), 6, 8),
        ];
        let result = ExtractionResult::from_matches(&matches);
        assert_eq!(result.get(Category::Hashtag), ["#a", "#b", "#a"]);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn sample_hash_is_category_scoped() {
        assert_ne!(
            sample_hash(Category::Phone, "5551234567"),
            sample_hash(Category::CreditCard, "5551234567")
        );
        assert_eq!(sample_hash(Category::Phone, "x").len(), 64);
    }
}
