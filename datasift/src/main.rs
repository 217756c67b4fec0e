// datasift/src/main.rs
//! datasift entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use datasift::cli::{Cli, Commands};
use datasift::commands::{self, extract::ExtractOptions};
use datasift::logger;
use datasift_core::RegexExtractor;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Extract(cmd) => {
            let mut config = commands::load_config(cmd.config.as_deref())?;
            config.set_disabled_categories(&cmd.disable);
            let engine = RegexExtractor::new(config)?;
            let input = commands::read_input(&cmd.input_file)?;
            let opts = ExtractOptions {
                input,
                output_path: (!cmd.no_save).then_some(cmd.output),
                json_stdout: cmd.json_stdout,
                summary: cmd.summary,
            };
            commands::extract::run_extract_opts(&engine, opts)?;
        }
        Commands::Sanitize(cmd) => {
            let engine = RegexExtractor::new(commands::load_config(cmd.config.as_deref())?)?;
            let input = commands::read_input(&cmd.input_file)?;
            commands::sanitize::run_sanitize(&engine, &input)?;
        }
        Commands::Rules(cmd) => {
            let config = commands::load_config(cmd.config.as_deref())?;
            commands::rules::run_rules(&config)?;
        }
    }

    Ok(())
}
