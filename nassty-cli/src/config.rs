//! CLI configuration
//!
//! The config file provides defaults; command-line flags override it.

use std::path::Path;

use nassty_config::{LogLevel, NasstyConfig, OutputFormat};
use nassty_log::Level;

use crate::error::CliError;

/// Read the config file, or fall back to defaults when none is given
pub fn load(path: Option<&Path>) -> Result<NasstyConfig, CliError> {
    let Some(path) = path else {
        return Ok(NasstyConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;

    NasstyConfig::from_json_str(&content).map_err(|source| CliError::Config {
        path: path.display().to_string(),
        source,
    })
}

/// Settings given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub chunk_size: Option<usize>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<String>,
    pub trace_chars: bool,
}

impl Overrides {
    pub fn apply(self, config: &mut NasstyConfig) -> Result<(), CliError> {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.output.chunk_size = chunk_size;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.log_file.is_some() {
            config.logging.file = self.log_file;
        }
        if self.trace_chars {
            config.lexer.trace_chars = true;
        }

        if config.output.chunk_size == 0 {
            return Err(CliError::Option("chunk size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Map a config-file level onto the logger's level.
///
/// `silent` keeps internal errors visible.
pub fn log_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Silent | LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    }
}
