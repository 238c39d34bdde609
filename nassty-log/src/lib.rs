//! nassty-log - structured logging
//!
//! Logging for the nassty tokenizer and its front ends:
//! - **Explicit**: there is no global logger, every component receives an `Arc<Logger>`
//! - **Lazy**: macros check the level before formatting the message
//! - **Non-blocking for crashes**: a bounded ring buffer keeps the last N records
//!
//! # Quick start
//!
//! ```
//! use nassty_log::{debug, LogConfig, Level};
//!
//! let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(64).init();
//! debug!(logger, "tokenizer ready");
//! assert_eq!(ring.unwrap().len(), 1);
//! ```
//!
//! Components that do not care about logging take [`Logger::noop`].

mod macros;

mod config;
mod logger;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger};
pub use record::{Level, ParseLevelError, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "stdout")]
pub use logger::StdoutSink;

#[cfg(feature = "stderr")]
pub use logger::StderrSink;

#[cfg(feature = "file")]
pub use logger::FileSink;

/// Logging result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up log outputs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while opening a file sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
