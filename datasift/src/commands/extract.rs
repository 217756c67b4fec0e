// datasift/src/commands/extract.rs
//! The `extract` command: run the pipeline and report the category mapping.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use datasift_core::{Category, ExtractionEngine, ExtractionResult};

use crate::ui::output_format::{print_message, MessageKind};
use crate::ui::report;

/// Options for a single extraction run.
pub struct ExtractOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub json_stdout: bool,
    pub summary: bool,
}

/// Runs the extraction and handles all output. Returns the result for callers that
/// want to inspect it.
pub fn run_extract_opts(engine: &dyn ExtractionEngine, opts: ExtractOptions) -> Result<ExtractionResult> {
    info!("Starting extraction.");

    let (result, summary) = engine
        .extract_with_summary(&opts.input)
        .context("Extraction failed")?;
    debug!("Extracted {} values in total.", result.total());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if opts.json_stdout {
        let json = result.to_json_pretty().context("Failed to serialize result")?;
        writeln!(writer, "{}", json)?;
    } else {
        report::print_report(&mut writer, &result, opts.input.chars().count(), supports_color)?;
    }

    if opts.summary {
        report::print_summary(&mut io::stderr(), &summary)?;
    }

    if let Some(path) = &opts.output_path {
        save_result(&result, path)?;
        if !opts.json_stdout {
            writeln!(writer)?;
            print_message(
                &mut writer,
                MessageKind::Success,
                &format!("Results saved to {}", path.display()),
                supports_color,
            )?;
        }
    }

    for category in Category::ALL {
        debug!("{}: {} value(s)", category, result.get(category).len());
    }
    info!("Extraction completed.");
    Ok(result)
}

/// Writes the result as pretty-printed JSON.
pub fn save_result(result: &ExtractionResult, path: &Path) -> Result<()> {
    let json = result.to_json_pretty().context("Failed to serialize result")?;
    fs::write(path, json).with_context(|| format!("Failed to write output file: {}", path.display()))?;
    debug!("Result written to {}.", path.display());
    Ok(())
}
