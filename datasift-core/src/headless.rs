// File: datasift-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot extraction without managing an engine.

use log::debug;

use crate::config::ExtractorConfig;
use crate::engine::ExtractionEngine;
use crate::engines::regex_engine::RegexExtractor;
use crate::errors::ExtractError;
use crate::extraction_match::ExtractionResult;

/// Builds an extractor for `config` and runs it once over `text`.
///
/// Compilation failures surface as [`ExtractError::AnyhowWrapper`]; the extraction itself
/// can only fail with [`ExtractError::InputTooLarge`].
pub fn headless_extract_string(
    config: ExtractorConfig,
    text: &str,
) -> Result<ExtractionResult, ExtractError> {
    let engine = RegexExtractor::new(config)?;
    debug!("Running headless extraction over {} bytes.", text.len());
    engine.extract(text)
}

/// Extracts from `text` with the embedded default rules.
pub fn extract(text: &str) -> Result<ExtractionResult, ExtractError> {
    let config = ExtractorConfig::load_default_rules()?;
    headless_extract_string(config, text)
}
