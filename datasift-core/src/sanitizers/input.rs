// datasift-core/src/sanitizers/input.rs
//! Size bound and denylist removal applied to raw input.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::{SanitizerConfig, DEFAULT_MAX_INPUT_CHARS};
use crate::errors::ExtractError;

lazy_static! {
    /// `<script ...>...</script>`, case-insensitive, spanning newlines, shortest body.
    static ref SCRIPT_BLOCK_PATTERN: Regex = Regex::new(r"(?is)<script[^>]*>.*?</script>")
        .expect("script block pattern is valid");

    /// Literal `javascript:` prefix, case-insensitive.
    static ref JAVASCRIPT_SCHEME_PATTERN: Regex = Regex::new(r"(?i)javascript:")
        .expect("javascript scheme pattern is valid");
}

/// Bounds and cleans input text before extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSanitizer {
    max_input_chars: usize,
    strip_script_blocks: bool,
    strip_javascript_scheme: bool,
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            strip_script_blocks: true,
            strip_javascript_scheme: true,
        }
    }
}

impl InputSanitizer {
    pub fn from_config(config: &SanitizerConfig) -> Self {
        Self {
            max_input_chars: config.max_input_chars(),
            strip_script_blocks: config.strip_script_blocks(),
            strip_javascript_scheme: config.strip_javascript_scheme(),
        }
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Rejects oversized input, then removes script blocks and `javascript:` prefixes.
    ///
    /// The size check counts characters and runs before anything else, so an oversized
    /// input is never partially processed. Removal is textual deletion: matched spans
    /// are cut out and the surrounding text is concatenated. The caller's string is
    /// never modified.
    pub fn sanitize(&self, text: &str) -> Result<String, ExtractError> {
        let length = text.chars().count();
        if length > self.max_input_chars {
            return Err(ExtractError::InputTooLarge {
                length,
                max: self.max_input_chars,
            });
        }

        let mut sanitized = text.to_string();
        if self.strip_script_blocks {
            sanitized = SCRIPT_BLOCK_PATTERN.replace_all(&sanitized, "").into_owned();
        }
        if self.strip_javascript_scheme {
            sanitized = JAVASCRIPT_SCHEME_PATTERN.replace_all(&sanitized, "").into_owned();
        }

        if sanitized.len() != text.len() {
            debug!(
                "Sanitizer removed {} bytes of denylisted content.",
                text.len() - sanitized.len()
            );
        }
        Ok(sanitized)
    }
}

/// Sanitizes `text` with the default 10,000 character bound and both removals enabled.
pub fn sanitize_input(text: &str) -> Result<String, ExtractError> {
    InputSanitizer::default().sanitize(text)
}
