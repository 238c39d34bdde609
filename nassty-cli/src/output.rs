//! Token output formats

use std::io::{self, Write};

use nassty_config::OutputFormat;
use nassty_core::Token;

/// Writes tokens in the configured format as they are produced
pub struct TokenPrinter<W: Write> {
    format: OutputFormat,
    out: W,
    written: usize,
}

impl<W: Write> TokenPrinter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            written: 0,
        }
    }

    pub fn write(&mut self, token: &Token) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, token)?;
                self.out.write_all(b"\n")?;
            }
            // comments dropped, everything else echoed verbatim
            OutputFormat::Strip => {
                if !token.kind.is_comment() {
                    self.out.write_all(token.text.as_bytes())?;
                }
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Tokens seen so far, including stripped ones
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
