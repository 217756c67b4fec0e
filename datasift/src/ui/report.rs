// datasift/src/ui/report.rs
//! The extraction report: banner, JSON body, trailer, and an optional summary table.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use datasift_core::{ExtractionResult, ExtractionSummaryItem};

use crate::ui::output_format::{print_message, MessageKind};

pub const BANNER_WIDTH: usize = 60;
pub const REPORT_TITLE: &str = "SECURE DATA EXTRACTION RESULTS";

fn rule_line() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Prints the full console report for one extraction run.
pub fn print_report<W: Write>(
    writer: &mut W,
    result: &ExtractionResult,
    input_chars: usize,
    supports_color: bool,
) -> io::Result<()> {
    let json = result
        .to_json_pretty()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(writer, "{}", rule_line())?;
    if supports_color {
        writeln!(writer, "{}", REPORT_TITLE.bold())?;
    } else {
        writeln!(writer, "{}", REPORT_TITLE)?;
    }
    writeln!(writer, "{}", rule_line())?;
    writeln!(writer, "{}", json)?;
    writeln!(writer)?;
    writeln!(writer, "{}", rule_line())?;
    print_message(
        writer,
        MessageKind::Info,
        &format!("Processed {} characters safely", input_chars),
        supports_color,
    )?;
    print_message(
        writer,
        MessageKind::Info,
        "Credit card data masked for protection",
        supports_color,
    )?;
    writeln!(writer, "{}", rule_line())
}

/// Builds the per-category summary table.
pub fn summary_table(summary: &[ExtractionSummaryItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Reported", "Dropped"]);
    for item in summary {
        table.add_row(vec![
            Cell::new(item.category.as_str()),
            Cell::new(item.occurrences),
            Cell::new(item.dropped),
        ]);
    }
    table
}

/// Prints the summary table.
pub fn print_summary<W: Write>(writer: &mut W, summary: &[ExtractionSummaryItem]) -> io::Result<()> {
    writeln!(writer, "{}", summary_table(summary))
}
