//! Configuration management for `datasift-core`.
//!
//! This module defines the extraction rules that make up the Pattern Table and the
//! sanitizer settings that bound and clean the input. It handles YAML
//! deserialization, validation, and merging user overrides over the embedded defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::category::Category;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Default bound on input size, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// A single extraction rule: one category and the pattern that finds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ExtractionRule {
    /// The category this rule populates.
    pub category: Category,
    /// The regex pattern string.
    pub pattern: String,
    /// Human-readable description of what the rule targets.
    #[serde(default)]
    pub description: Option<String>,
    /// If true, the pattern is matched case-insensitively.
    #[serde(default)]
    pub case_insensitive: bool,
    /// If true, the dot character `.` in regex will match newlines.
    #[serde(default)]
    pub dot_matches_new_line: bool,
    /// If true, matches go through the category's programmatic post-filter
    /// (Luhn for cards, placeholder rejection for phones).
    #[serde(default)]
    pub programmatic_validation: bool,
    /// If true, surviving matches are masked before they are returned.
    #[serde(default)]
    pub mask: bool,
    /// Explicit override for enabling/disabling the rule.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl ExtractionRule {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Settings for the input sanitizer. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Inputs longer than this many characters are rejected outright.
    pub max_input_chars: Option<usize>,
    /// Remove `<script ...>...</script>` blocks.
    pub strip_script_blocks: Option<bool>,
    /// Remove `javascript:` scheme prefixes.
    pub strip_javascript_scheme: Option<bool>,
}

impl SanitizerConfig {
    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars.unwrap_or(DEFAULT_MAX_INPUT_CHARS)
    }

    pub fn strip_script_blocks(&self) -> bool {
        self.strip_script_blocks.unwrap_or(true)
    }

    pub fn strip_javascript_scheme(&self) -> bool {
        self.strip_javascript_scheme.unwrap_or(true)
    }
}

/// Top-level configuration: the Pattern Table source plus sanitizer settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// One rule per category.
    #[serde(default)]
    pub rules: Vec<ExtractionRule>,
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
}

impl ExtractorConfig {
    /// Loads extraction rules from a YAML file and validates them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ExtractorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: ExtractorConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Returns the rule for a category, if configured.
    pub fn rule(&self, category: Category) -> Option<&ExtractionRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// Disables the given categories.
    ///
    /// Disabled categories still appear in every extraction result, with no values.
    pub fn set_disabled_categories(&mut self, disabled: &[Category]) {
        let disable_set: HashSet<Category> = disabled.iter().copied().collect();
        let configured: HashSet<Category> = self.rules.iter().map(|r| r.category).collect();

        for category in disable_set.difference(&configured) {
            warn!("Category '{}' in disable list has no configured rule.", category);
        }

        for rule in self.rules.iter_mut() {
            if disable_set.contains(&rule.category) {
                debug!("Disabling category '{}'.", rule.category);
                rule.enabled = Some(false);
            }
        }
    }
}

/// Merges user-defined rules and sanitizer settings over the defaults.
///
/// User rules replace default rules category by category; categories the user does not
/// mention keep their default rule.
pub fn merge_rules(
    default_config: ExtractorConfig,
    user_config: Option<ExtractorConfig>,
) -> ExtractorConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut final_rules_map: BTreeMap<Category, ExtractionRule> = default_config
        .rules
        .into_iter()
        .map(|rule| (rule.category, rule))
        .collect();

    let mut final_sanitizer = default_config.sanitizer;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            final_rules_map.insert(user_rule.category, user_rule);
        }

        if let Some(max) = user_cfg.sanitizer.max_input_chars {
            debug!("Overriding max input size with user value: {}", max);
            final_sanitizer.max_input_chars = Some(max);
        }
        if let Some(strip) = user_cfg.sanitizer.strip_script_blocks {
            final_sanitizer.strip_script_blocks = Some(strip);
        }
        if let Some(strip) = user_cfg.sanitizer.strip_javascript_scheme {
            final_sanitizer.strip_javascript_scheme = Some(strip);
        }
    }

    let final_rules: Vec<ExtractionRule> = final_rules_map.into_values().collect();
    debug!("Final total rules after merge: {}", final_rules.len());

    ExtractorConfig {
        rules: final_rules,
        sanitizer: final_sanitizer,
    }
}

/// Validates rule integrity (unique categories, bounded and compilable patterns).
fn validate_config(config: &ExtractorConfig) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for rule in &config.rules {
        if !seen.insert(rule.category) {
            errors.push(format!("Duplicate rule for category '{}'.", rule.category));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.category));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.category,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.category, e));
        }
    }

    if config.sanitizer.max_input_chars == Some(0) {
        errors.push("`sanitizer.max_input_chars` must be greater than zero.".to_string());
    }

    if !errors.is_empty() {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}
