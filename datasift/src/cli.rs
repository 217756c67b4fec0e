// datasift/src/cli.rs
//! Command-line interface definition for the datasift application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use datasift_core::Category;

use crate::sample::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "datasift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract phone numbers, card numbers, hashtags and currency amounts from text",
    long_about = "datasift sanitizes free text (removing <script> blocks and javascript: prefixes), extracts phone numbers, credit card numbers, hashtags and currency amounts, validates card numbers with the Luhn checksum and masks them for display.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts entities from the input and writes them as JSON.
    Extract(ExtractCommand),

    /// Prints the sanitized input without extracting anything.
    Sanitize(SanitizeCommand),

    /// Lists the active extraction rules.
    Rules(RulesCommand),
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Input file. `-` reads stdin. Falls back to the embedded sample report when the file does not exist.
    #[arg(long, short = 'i', value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input_file: PathBuf,

    /// Where to write the JSON result.
    #[arg(long, short = 'o', value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Do not write the JSON result to a file.
    #[arg(long = "no-save")]
    pub no_save: bool,

    /// Path to a custom rule configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Categories to disable (comma-separated). They still appear in the output, empty.
    #[arg(long, short = 'x', value_delimiter = ',')]
    pub disable: Vec<Category>,

    /// Print only the JSON result to stdout, without the report banner.
    #[arg(long = "json-stdout")]
    pub json_stdout: bool,

    /// Print a per-category table of reported and dropped matches to stderr.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Input file. `-` reads stdin. Falls back to the embedded sample report when the file does not exist.
    #[arg(long, short = 'i', value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input_file: PathBuf,

    /// Path to a custom rule configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom rule configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
