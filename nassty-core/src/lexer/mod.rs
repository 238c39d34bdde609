//! Streaming stylesheet lexer
//!
//! - Incremental: input can be split anywhere, output is identical
//! - Lossless: token texts concatenate back to the input
//! - Total: malformed input becomes token kinds, never errors

pub mod builder;
pub mod context;
pub mod decoder;
pub mod error;
pub mod position;
pub mod token;
pub mod tokenizer;
pub mod trace;

pub use context::{Context, Quote};
pub use error::LexError;
pub use position::{Newline, Position, PositionTracker};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_chunks, Emit, TokenStream, Tokenizer};
pub use trace::TraceEvent;
