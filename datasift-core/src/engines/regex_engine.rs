// datasift-core/src/engines/regex_engine.rs
//! An `ExtractionEngine` implementation driven by the compiled regex Pattern Table.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::category::Category;
use crate::config::ExtractorConfig;
use crate::engine::ExtractionEngine;
use crate::errors::ExtractError;
use crate::extraction_match::{ExtractionMatch, ExtractionResult, ExtractionSummaryItem};
use crate::masking::{log_dropped_match_debug, log_extraction_match_debug, mask_card};
use crate::sanitizers::compiler::{get_or_compile_rules, CompiledRule, CompiledRules};
use crate::sanitizers::input::InputSanitizer;
use crate::validators;

/// The reference extraction pipeline.
///
/// Holds an immutable compiled Pattern Table and input sanitizer. Cloning is cheap and
/// the engine is safe to share across threads.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    compiled_rules: Arc<CompiledRules>,
    sanitizer: InputSanitizer,
    config: ExtractorConfig,
}

/// Matches and drop counts for one run, in category order.
struct PipelineOutput {
    matches: Vec<ExtractionMatch>,
    summary: Vec<ExtractionSummaryItem>,
}

impl RegexExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile extraction rules for RegexExtractor")?;
        let sanitizer = InputSanitizer::from_config(&config.sanitizer);

        info!(
            "RegexExtractor ready: {} rules, max input {} chars.",
            compiled_rules.rules.len(),
            sanitizer.max_input_chars()
        );

        Ok(Self {
            compiled_rules,
            sanitizer,
            config,
        })
    }

    /// Builds an extractor from the embedded default rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(ExtractorConfig::load_default_rules()?)
    }

    /// Category-specific post-filter. Returns the reason a match is dropped, if any.
    fn rejection_reason(compiled_rule: &CompiledRule, matched: &str) -> Option<&'static str> {
        if !compiled_rule.programmatic_validation {
            return None;
        }
        match compiled_rule.category {
            Category::Phone if validators::is_placeholder_phone(matched) => {
                Some("placeholder number")
            }
            Category::CreditCard if !validators::is_valid_credit_card_programmatically(matched) => {
                Some("failed Luhn check")
            }
            _ => None,
        }
    }

    fn render_output(compiled_rule: &CompiledRule, matched: &str) -> String {
        if compiled_rule.mask {
            mask_card(matched)
        } else {
            matched.to_string()
        }
    }

    fn run_pipeline(&self, text: &str) -> Result<PipelineOutput, ExtractError> {
        let sanitized = self.sanitizer.sanitize(text)?;
        let mut matches = Vec::new();
        let mut summary = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let mut item = ExtractionSummaryItem {
                category,
                occurrences: 0,
                dropped: 0,
            };

            let Some(compiled_rule) = self.compiled_rules.get(category) else {
                debug!("No rule configured for '{}'; reporting no values.", category);
                summary.push(item);
                continue;
            };
            if !compiled_rule.enabled {
                debug!("Category '{}' is disabled; reporting no values.", category);
                summary.push(item);
                continue;
            }

            for found in compiled_rule.regex.find_iter(&sanitized) {
                let matched = found.as_str();
                if let Some(reason) = Self::rejection_reason(compiled_rule, matched) {
                    log_dropped_match_debug(category.as_str(), matched, reason);
                    item.dropped += 1;
                    continue;
                }

                let output = Self::render_output(compiled_rule, matched);
                log_extraction_match_debug(category.as_str(), matched, &output);
                matches.push(ExtractionMatch::new(
                    category,
                    matched,
                    output,
                    found.start(),
                    found.end(),
                ));
                item.occurrences += 1;
            }
            summary.push(item);
        }

        debug!(
            "Extraction finished: {} values from {} input characters.",
            matches.len(),
            text.chars().count()
        );
        Ok(PipelineOutput { matches, summary })
    }
}

impl ExtractionEngine for RegexExtractor {
    fn sanitize(&self, text: &str) -> Result<String, ExtractError> {
        self.sanitizer.sanitize(text)
    }

    fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractError> {
        let output = self.run_pipeline(text)?;
        Ok(ExtractionResult::from_matches(&output.matches))
    }

    fn find_matches(&self, text: &str) -> Result<Vec<ExtractionMatch>, ExtractError> {
        Ok(self.run_pipeline(text)?.matches)
    }

    fn summarize(&self, text: &str) -> Result<Vec<ExtractionSummaryItem>, ExtractError> {
        Ok(self.run_pipeline(text)?.summary)
    }

    fn extract_with_summary(
        &self,
        text: &str,
    ) -> Result<(ExtractionResult, Vec<ExtractionSummaryItem>), ExtractError> {
        let output = self.run_pipeline(text)?;
        Ok((ExtractionResult::from_matches(&output.matches), output.summary))
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_config(&self) -> &ExtractorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> RegexExtractor {
        RegexExtractor::with_default_rules().unwrap()
    }

    #[test]
    fn phone_with_dots_is_extracted() {
        let result = extractor().extract("Call 555.987.6543 now").unwrap();
        assert_eq!(result.get(Category::Phone), ["555.987.6543"]);
    }

    #[test]
    fn valid_card_is_masked_and_invalid_card_dropped() {
        let result = extractor()
            .extract("Card: 4532 0151 1283 0366 and 1234 5678 9012 3456 or 4532 1488 0343 6467")
            .unwrap();
        assert_eq!(result.get(Category::CreditCard), ["***************0366"]);
    }

    #[test]
    fn summary_counts_dropped_matches() {
        let summary = extractor()
            .summarize("Card: 1234 5678 9012 3456, 000-000-0000, 555-123-4567")
            .unwrap();
        let card = summary.iter().find(|s| s.category == Category::CreditCard).unwrap();
        assert_eq!((card.occurrences, card.dropped), (0, 1));
        let phone = summary.iter().find(|s| s.category == Category::Phone).unwrap();
        assert_eq!(phone.occurrences, 1);
        assert!(phone.dropped >= 1);
        assert_eq!(summary.len(), 4);
    }

    #[test]
    fn extract_with_summary_agrees_with_separate_calls() {
        let engine = extractor();
        let text = "Card: 5425-2334-3010-9903, 4532 1488 0343 6467 #Tag $5 000-000-0000";
        let (result, summary) = engine.extract_with_summary(text).unwrap();
        assert_eq!(result, engine.extract(text).unwrap());
        assert_eq!(summary, engine.summarize(text).unwrap());
        let card = summary.iter().find(|s| s.category == Category::CreditCard).unwrap();
        assert_eq!((card.occurrences, card.dropped), (1, 1));
        assert_eq!(result.get(Category::CreditCard), ["***************9903"]);
    }

    #[test]
    fn find_matches_reports_positions_in_sanitized_text() {
        let engine = extractor();
        let text = "<script>x</script>#Tag";
        let matches = engine.find_matches(text).unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.category, Category::Hashtag);
        let sanitized = engine.sanitize(text).unwrap();
        assert_eq!(&sanitized[m.start..m.end], "#Tag");
    }

    #[test]
    fn disabled_category_is_present_but_empty() {
        let mut config = ExtractorConfig::load_default_rules().unwrap();
        config.set_disabled_categories(&[Category::Hashtag]);
        let engine = RegexExtractor::new(config).unwrap();
        let result = engine.extract("#Visible $5").unwrap();
        assert!(result.get(Category::Hashtag).is_empty());
        assert_eq!(result.get(Category::Currency), ["$5"]);
        assert_eq!(result.iter().count(), 4);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = Arc::new(extractor());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.extract(&format!("#tag{} $1{}.00", i, i)).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.get(Category::Hashtag), [format!("#tag{}", i)]);
        }
    }
}
