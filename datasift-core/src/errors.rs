//! errors.rs - Custom error types for the datasift-core library.
//!
//! This module defines a structured error enum for the library. The extraction
//! pipeline itself only ever fails with [`ExtractError::InputTooLarge`]; the
//! remaining variants belong to rule loading and compilation.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `datasift-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractError {
    /// The input exceeded the configured character bound. No matching was attempted.
    #[error("Input exceeds maximum length: {length} characters (maximum is {max})")]
    InputTooLarge { length: usize, max: usize },

    #[error("Failed to compile extraction rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Unknown category '{0}' (expected one of: phone, credit_card, hashtag, currency)")]
    UnknownCategory(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl ExtractError {
    /// Returns `true` when this error is the input size rejection.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, ExtractError::InputTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_too_large_message_names_both_lengths() {
        let err = ExtractError::InputTooLarge { length: 10_001, max: 10_000 };
        assert!(err.is_input_too_large());
        assert_eq!(
            err.to_string(),
            "Input exceeds maximum length: 10001 characters (maximum is 10000)"
        );
    }

    #[test]
    fn other_variants_are_not_size_errors() {
        assert!(!ExtractError::Fatal("boom".into()).is_input_too_large());
    }
}
