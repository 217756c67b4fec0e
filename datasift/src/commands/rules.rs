// datasift/src/commands/rules.rs
//! The `rules` command: show the active Pattern Table.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::{self, Write};

use datasift_core::{Category, ExtractorConfig};

/// Builds a table with one row per category, in the fixed order.
pub fn rules_table(config: &ExtractorConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Pattern", "Validated", "Masked", "Enabled"]);

    for category in Category::ALL {
        match config.rule(category) {
            Some(rule) => table.add_row(vec![
                category.as_str().to_string(),
                rule.pattern.clone(),
                yes_no(rule.programmatic_validation),
                yes_no(rule.mask),
                yes_no(rule.is_enabled()),
            ]),
            None => table.add_row(vec![
                category.as_str().to_string(),
                "(none)".to_string(),
                "-".to_string(),
                "-".to_string(),
                "no".to_string(),
            ]),
        };
    }
    table
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

pub fn run_rules(config: &ExtractorConfig) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{}", rules_table(config))
}
