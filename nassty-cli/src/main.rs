//! nassty CLI - Command line interface
//!
//! Tokenizes a stylesheet from a file or stdin and prints the tokens as
//! they are produced. Input is read in fixed-size byte chunks, so large or
//! piped input never has to be held in memory.

use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

mod config;
mod error;
mod logging;
mod output;

use crate::config::Overrides;
use crate::error::CliError;
use crate::output::TokenPrinter;
use nassty_config::{LogLevel, OutputFormat};
use nassty_core::Tokenizer;
use nassty_log::{debug, info};

#[derive(Parser)]
#[command(
    name = "nassty",
    about = "Streaming stylesheet tokenizer",
    version = "0.1.0"
)]
struct Cli {
    /// Stylesheet to tokenize (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Bytes read per chunk
    #[arg(long, value_name = "N")]
    chunk_size: Option<usize>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LevelArg>,

    /// Append log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Log every character read (needs --log-level trace)
    #[arg(long)]
    trace_chars: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Strip,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Strip => OutputFormat::Strip,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    Silent,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LevelArg> for LogLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Silent => LogLevel::Silent,
            LevelArg::Error => LogLevel::Error,
            LevelArg::Warn => LogLevel::Warn,
            LevelArg::Info => LogLevel::Info,
            LevelArg::Debug => LogLevel::Debug,
            LevelArg::Trace => LogLevel::Trace,
        }
    }
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format.map(Into::into),
            chunk_size: self.chunk_size,
            log_level: self.log_level.map(Into::into),
            log_file: self.log_file.clone(),
            trace_chars: self.trace_chars,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = config::load(cli.config.as_deref())?;
    cli.overrides().apply(&mut config)?;

    let logger = logging::init(&config.logging)?;
    debug!(logger, "Configuration: {:?}", config);

    let tokenizer = Tokenizer::with_config(&config.lexer, logger.clone());
    let stdout = io::stdout();
    let mut printer = TokenPrinter::new(config.output.format, BufWriter::new(stdout.lock()));

    let count = match &cli.file {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })?;
            info!(logger, "Tokenizing {}", path.display());
            pump(file, tokenizer, &mut printer, config.output.chunk_size)?
        }
        None => {
            info!(logger, "Tokenizing stdin");
            pump(io::stdin().lock(), tokenizer, &mut printer, config.output.chunk_size)?
        }
    };

    info!(logger, "Produced {} tokens", count);
    Ok(())
}

/// Feed `reader` to the tokenizer chunk by chunk, printing tokens as soon
/// as they are complete. Returns the number of tokens printed.
fn pump<R: Read, W: Write>(
    mut reader: R,
    mut tokenizer: Tokenizer,
    printer: &mut TokenPrinter<W>,
    chunk_size: usize,
) -> Result<usize, CliError> {
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        tokenizer.feed_bytes(&buf[..n])?;
        for token in tokenizer.drain() {
            printer.write(&token)?;
        }
    }

    tokenizer.finish()?;
    for token in tokenizer.drain() {
        printer.write(&token)?;
    }
    printer.flush()?;

    Ok(printer.written())
}
