//! compiler.rs - Compiles and caches the Pattern Table.
//!
//! An `ExtractorConfig` is compiled into `CompiledRules` once. The result is immutable
//! and shared through an `Arc`, so any number of extractors (and threads) can read it
//! without locking. A process-wide cache keyed by the config hash avoids recompiling
//! identical tables.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::category::Category;
use crate::config::{ExtractionRule, ExtractorConfig, MAX_PATTERN_LENGTH};
use crate::errors::ExtractError;

/// A single compiled extraction rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The category this rule populates.
    pub category: Category,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Whether the category's post-filter runs on each match.
    pub programmatic_validation: bool,
    /// Whether surviving matches are masked.
    pub mask: bool,
    /// Disabled rules stay compiled but produce no values.
    pub enabled: bool,
}

/// The compiled Pattern Table, ordered by category.
#[derive(Debug)]
pub struct CompiledRules {
    /// Compiled rules in the fixed category iteration order.
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Returns the compiled rule for `category`, if one was configured.
    pub fn get(&self, category: Category) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.category == category)
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules, keyed by a hash of the config.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the rule set to a stable cache key. Rules are sorted by category first.
fn hash_rules(rules: &[ExtractionRule]) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut rules_to_hash = rules.to_vec();
    rules_to_hash.sort_by_key(|r| r.category);
    rules_to_hash.hash(&mut hasher);
    hasher.finish()
}

/// Compiles extraction rules into `CompiledRules`.
///
/// Every failing rule is reported; the first failure does not hide the rest.
pub fn compile_rules(rules_to_compile: Vec<ExtractionRule>) -> Result<CompiledRules, ExtractError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let name = rule.category.to_string();
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(ExtractError::PatternLengthExceeded(
                name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .case_insensitive(rule.case_insensitive)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "datasift_core::compiler",
                    "Rule '{}' compiled successfully.",
                    &name
                );
                compiled_rules.push(CompiledRule {
                    category: rule.category,
                    regex,
                    programmatic_validation: rule.programmatic_validation,
                    mask: rule.mask,
                    enabled: rule.is_enabled(),
                });
            }
            Err(e) => compilation_errors.push(ExtractError::RuleCompilationError(name, e)),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(ExtractError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    compiled_rules.sort_by_key(|r| r.category);
    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Gets `CompiledRules` for `config` from the cache, compiling them on a miss.
pub fn get_or_compile_rules(config: &ExtractorConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_rules(&config.rules);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|_| anyhow!("compiled rules cache lock poisoned"))?;
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = Arc::new(compile_rules(config.rules.clone())?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|_| anyhow!("compiled rules cache lock poisoned"))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached rules for key: {}", cache_key);
    Ok(compiled)
}
