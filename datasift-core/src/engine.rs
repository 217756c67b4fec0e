// datasift-core/src/engine.rs
//! Defines the core `ExtractionEngine` trait.
//!
//! The trait is the seam between callers (the CLI, tests, embedding hosts) and the
//! concrete pipeline. Implementations must be reentrant: every method takes `&self`
//! and no call may mutate shared state, so one engine can serve concurrent callers.
//!
//! License: MIT OR APACHE 2.0

use crate::config::ExtractorConfig;
use crate::errors::ExtractError;
use crate::extraction_match::{ExtractionMatch, ExtractionResult, ExtractionSummaryItem};
use crate::sanitizers::compiler::CompiledRules;

/// The extraction pipeline: sanitize, match, validate, mask, aggregate.
pub trait ExtractionEngine: Send + Sync {
    /// Applies the size bound and denylist removals to `text`.
    ///
    /// Fails with [`ExtractError::InputTooLarge`] when the bound is exceeded.
    fn sanitize(&self, text: &str) -> Result<String, ExtractError>;

    /// Runs the full pipeline and returns the mapping of every category to its values.
    ///
    /// The only possible error is [`ExtractError::InputTooLarge`], raised before any
    /// matching. Malformed input never fails; it simply contributes nothing.
    fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractError>;

    /// Runs the full pipeline and returns each surviving match with its position.
    ///
    /// Matches are grouped by category in the fixed order, and ordered left to right
    /// within a category.
    fn find_matches(&self, text: &str) -> Result<Vec<ExtractionMatch>, ExtractError>;

    /// Returns per-category counts of reported and dropped matches.
    fn summarize(&self, text: &str) -> Result<Vec<ExtractionSummaryItem>, ExtractError>;

    /// Runs the pipeline once and returns both the category mapping and the counts.
    fn extract_with_summary(
        &self,
        text: &str,
    ) -> Result<(ExtractionResult, Vec<ExtractionSummaryItem>), ExtractError>;

    /// Returns the compiled Pattern Table.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the configuration the engine was built from.
    fn get_config(&self) -> &ExtractorConfig;
}
