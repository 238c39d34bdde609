//! CLI logging setup
//!
//! Records go to stderr so stdout carries only tokens.

use std::sync::Arc;

use nassty_config::LoggingConfig;
use nassty_log::{LogConfig, Logger};

use crate::config::log_level;
use crate::error::CliError;

pub fn init(config: &LoggingConfig) -> Result<Arc<Logger>, CliError> {
    let mut log_config = LogConfig::new(log_level(config.level)).with_stderr();
    if let Some(path) = &config.file {
        log_config = log_config.with_file(path.clone());
    }

    let (logger, _) = log_config.try_init()?;
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nassty_config::LogLevel;
    use nassty_log::{info, Level};

    #[test]
    fn test_level_from_config() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            file: None,
        };
        let logger = init(&config).unwrap();
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_file_output() {
        let path = std::env::temp_dir().join(format!("nassty_cli_log_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = LoggingConfig {
            level: LogLevel::Info,
            file: Some(path.display().to_string()),
        };
        let logger = init(&config).unwrap();
        info!(logger, "hello from the cli");

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(content.contains("hello from the cli"));
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = LoggingConfig {
            level: LogLevel::Info,
            file: Some("/nonexistent/dir/nassty.log".to_string()),
        };
        assert!(matches!(init(&config), Err(CliError::Logging(_))));
    }
}
