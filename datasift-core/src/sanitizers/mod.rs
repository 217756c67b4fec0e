//! Input sanitization and Pattern Table compilation.
//!
//! `input` bounds and cleans raw text before any matching happens: it rejects oversized
//! input and excises `<script>` blocks and `javascript:` prefixes. This is a narrow
//! denylist, not a general XSS sanitizer; every other injection vector passes through
//! unchanged.
//!
//! `compiler` turns an `ExtractorConfig` into the immutable, shareable `CompiledRules`
//! used by the extraction engine.

pub mod compiler;
pub mod input;
