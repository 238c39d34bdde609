//! nassty core - stylesheet tokenizer (pure logic, no IO)
//!
//! Turns chunked stylesheet text into whitespace, identifier, comment,
//! string and slash tokens with exact source positions.
//!
//! Configuration and logging are passed in explicitly, never read from
//! global state.

pub mod lexer;

pub use lexer::{tokenize, tokenize_chunks, Emit, LexError, Token, TokenKind, TokenStream, Tokenizer};

// Re-export config types from nassty-config
pub use nassty_config::LexerConfig;
