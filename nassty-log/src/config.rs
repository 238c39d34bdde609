//! One-call logger setup

use crate::logger::Logger;
use crate::ring_buffer::LogRingBuffer;
use crate::Level;
use std::sync::Arc;

/// Where records go
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputConfig {
    #[cfg(feature = "stdout")]
    Stdout,
    #[cfg(feature = "stderr")]
    Stderr,
    /// Append to the file at this path
    #[cfg(feature = "file")]
    File(String),
    /// Keep the last N records in memory
    RingBuffer(usize),
}

/// Logger configuration
///
/// ```
/// use nassty_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(1000)
///     .init();
/// assert_eq!(logger.level(), Level::Debug);
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// No outputs; add them with the `with_*` builders.
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// Debug level to stderr, plus a 10000-record ring buffer.
    ///
    /// Stdout is left alone because the CLI prints tokens there.
    #[cfg(feature = "stderr")]
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(10000)],
        }
    }

    /// Error level, no outputs.
    pub fn quiet() -> Self {
        LogConfig::new(Level::Error)
    }

    #[cfg(feature = "stdout")]
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    #[cfg(feature = "stderr")]
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    #[cfg(feature = "file")]
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Build the logger.
    ///
    /// Returns the last configured ring buffer, if any, so callers can dump
    /// it on failure. File outputs that cannot be opened are skipped; use
    /// [`LogConfig::try_init`] to surface that error.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            if let Err(e) = attach(&logger, output, &mut ring_buffer) {
                crate::warn!(logger, "log output skipped: {}", e);
            }
        }

        (logger, ring_buffer)
    }

    /// Like [`LogConfig::init`] but fails on the first output that cannot be attached.
    pub fn try_init(self) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            attach(&logger, output, &mut ring_buffer)?;
        }

        Ok((logger, ring_buffer))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::quiet()
    }
}

fn attach(
    logger: &Logger,
    output: OutputConfig,
    ring_buffer: &mut Option<Arc<LogRingBuffer>>,
) -> crate::Result<()> {
    match output {
        #[cfg(feature = "stdout")]
        OutputConfig::Stdout => logger.add_sink(crate::logger::StdoutSink),
        #[cfg(feature = "stderr")]
        OutputConfig::Stderr => logger.add_sink(crate::logger::StderrSink),
        #[cfg(feature = "file")]
        OutputConfig::File(path) => logger.add_sink(crate::logger::FileSink::new(path)?),
        OutputConfig::RingBuffer(capacity) => {
            let ring = LogRingBuffer::new(capacity);
            logger.add_sink(Arc::clone(&ring));
            *ring_buffer = Some(ring);
        }
    }
    Ok(())
}
