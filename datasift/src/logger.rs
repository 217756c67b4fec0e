// datasift/src/logger.rs
//! Logger initialisation for the CLI.
//!
//! Wraps `env_logger`. `RUST_LOG` is honoured unless an explicit level is passed, in
//! which case the explicit level wins.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}
