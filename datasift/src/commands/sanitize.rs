// datasift/src/commands/sanitize.rs
//! The `sanitize` command: print the input after denylist removal.

use anyhow::{Context, Result};
use std::io::{self, Write};

use datasift_core::ExtractionEngine;

pub fn run_sanitize(engine: &dyn ExtractionEngine, input: &str) -> Result<()> {
    let sanitized = engine.sanitize(input).context("Sanitization failed")?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write!(writer, "{}", sanitized)?;
    writer.flush()?;
    Ok(())
}
