//! CLI errors

use nassty_core::LexError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid option: {0}")]
    Option(String),

    #[error("logging setup failed: {0}")]
    Logging(#[from] nassty_log::Error),

    #[error("tokenizer failed: {0}")]
    Lex(#[from] LexError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
