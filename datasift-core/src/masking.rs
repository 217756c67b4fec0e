// datasift-core/src/masking.rs
//! Display masking for sensitive values and PII-safe debug logging.
//!
//! Masking here is purely presentational: the pipeline returns masked strings so that
//! callers never print a full card number, but nothing is encrypted or persisted.

use lazy_static::lazy_static;
use log::debug;

/// Number of trailing characters left readable by [`mask_card`].
pub const VISIBLE_SUFFIX_LEN: usize = 4;

/// Character used to replace masked positions.
pub const MASK_CHAR: char = '*';

lazy_static! {
    /// Initialized once: whether raw matched values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("DATASIFT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Masks a matched card number at the character level.
///
/// Every character of the original match except the final four becomes `*`, separators
/// included; the final four characters are kept verbatim. `"4532 1488 0343 6467"`
/// therefore masks to `"***************6467"`. Values of four characters or fewer are
/// returned unchanged.
pub fn mask_card(value: &str) -> String {
    let total = value.chars().count();
    if total <= VISIBLE_SUFFIX_LEN {
        return value.to_string();
    }

    let hidden = total - VISIBLE_SUFFIX_LEN;
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHAR } else { c })
        .collect()
}

/// Replaces a sensitive value with a length hint suitable for logs.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

/// Logs a surviving match without leaking its raw value unless explicitly allowed.
pub fn log_extraction_match_debug(category: &str, original: &str, output: &str) {
    debug!(
        "Extracted {}: original='{}', output='{}'",
        category,
        get_loggable_content(original),
        output
    );
}

/// Logs a match discarded by a post-filter or validator.
pub fn log_dropped_match_debug(category: &str, original: &str, reason: &str) {
    debug!(
        "Dropped {} match '{}': {}",
        category,
        get_loggable_content(original),
        reason
    );
}
