// datasift-core/src/lib.rs
//! # datasift Core Library
//!
//! `datasift-core` extracts four categories of structured entities from free text:
//! phone numbers, credit card numbers, hashtags and currency amounts. Extraction is a
//! short, pure pipeline:
//!
//! 1. **Sanitize**: reject input over the size bound (10,000 characters by default) and
//!    excise `<script>` blocks and `javascript:` prefixes.
//! 2. **Match**: run each category's pattern over the sanitized text, left to right.
//! 3. **Validate**: drop placeholder phone numbers and card numbers failing Luhn.
//! 4. **Mask**: hide all but the last four characters of card numbers.
//! 5. **Aggregate**: return a mapping that always carries all four categories.
//!
//! The library performs no I/O of its own beyond loading optional YAML rule files.
//!
//! ## Modules
//!
//! * `category`: The four extraction categories and their fixed order.
//! * `config`: `ExtractionRule`s and `ExtractorConfig`, YAML loading and merging.
//! * `sanitizers`: Input sanitization and Pattern Table compilation.
//! * `validators`: Luhn and placeholder-phone checks.
//! * `masking`: Card masking and PII-safe debug logging.
//! * `extraction_match`: Result, match and summary types.
//! * `engine`: The `ExtractionEngine` trait.
//! * `engines`: Concrete engine implementations.
//! * `headless`: One-shot convenience wrappers.
//!
//! ## Usage Example
//!
//! ```rust
//! use datasift_core::{Category, ExtractionEngine, RegexExtractor};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let extractor = RegexExtractor::with_default_rules()?;
//!     let result = extractor.extract("Card: 4532 0151 1283 0366, call 555.987.6543 #Paid")?;
//!
//!     assert_eq!(result.get(Category::Phone), ["555.987.6543"]);
//!     assert_eq!(result.get(Category::CreditCard), ["***************0366"]);
//!     assert_eq!(result.get(Category::Hashtag), ["#Paid"]);
//!     assert!(result.get(Category::Currency).is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline operations return [`ExtractError`]; the only error they raise is
//! [`ExtractError::InputTooLarge`]. Configuration loading uses `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod category;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod extraction_match;
pub mod headless;
pub mod masking;
pub mod sanitizers;
pub mod validators;

/// Re-exports the extraction categories.
pub use category::Category;

/// Re-exports the configuration types and functions for managing extraction rules.
pub use config::{
    merge_rules,
    ExtractionRule,
    ExtractorConfig,
    SanitizerConfig,
    DEFAULT_MAX_INPUT_CHARS,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type.
pub use errors::ExtractError;

/// Re-exports the engine trait and its regex implementation.
pub use engine::ExtractionEngine;
pub use engines::regex_engine::RegexExtractor;

/// Re-exports result types.
pub use extraction_match::{ExtractionMatch, ExtractionResult, ExtractionSummaryItem};

/// Re-exports one-shot helpers.
pub use headless::{extract, headless_extract_string};

pub use masking::mask_card;
pub use sanitizers::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
pub use sanitizers::input::{sanitize_input, InputSanitizer};
pub use validators::{is_valid_credit_card_programmatically, is_valid_luhn};
