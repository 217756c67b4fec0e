//! Command implementations and the input/config plumbing they share.

pub mod extract;
pub mod rules;
pub mod sanitize;

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read};
use std::path::Path;

use datasift_core::{merge_rules, ExtractorConfig};

use crate::sample::SAMPLE_INPUT;

/// Reads the input text.
///
/// `-` reads stdin. A missing file falls back to the embedded sample report; any other
/// read failure is an error.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        return Ok(buffer);
    }

    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}.", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found; using the embedded sample report.", path.display());
            Ok(SAMPLE_INPUT.to_string())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read input file {}", path.display())),
    }
}

/// Loads the default rules and merges an optional user file over them.
pub fn load_config(user_path: Option<&Path>) -> Result<ExtractorConfig> {
    let defaults = ExtractorConfig::load_default_rules()?;
    let user = user_path
        .map(ExtractorConfig::load_from_file)
        .transpose()
        .context("Failed to load user-defined configuration file")?;
    Ok(merge_rules(defaults, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test_log::test]
    fn missing_input_falls_back_to_sample() {
        let text = read_input(Path::new("/no/such/datasift/input.txt")).unwrap();
        assert_eq!(text, SAMPLE_INPUT);
    }

    #[test]
    fn existing_input_is_read_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "#only").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "#only");
    }

    #[test]
    fn config_without_user_file_is_the_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.rules.len(), 4);
    }
}
