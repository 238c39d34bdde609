//! Tokenizer errors
//!
//! Malformed stylesheet input is never an error: unterminated strings are
//! token kinds of their own. Errors here mean the tokenizer was misused or
//! its state machine is broken.

use super::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Input was fed after `finish()` or after an earlier failure
    #[error("tokenizer input is closed")]
    Closed,

    /// The state machine reached a state it can never legitimately be in
    #[error("[{position}] tokenizer invariant violated in {context} context: {detail}")]
    Invariant {
        context: &'static str,
        detail: String,
        position: Position,
    },
}

impl LexError {
    pub fn invariant(context: &'static str, position: Position, detail: impl Into<String>) -> Self {
        LexError::Invariant {
            context,
            detail: detail.into(),
            position,
        }
    }

    /// Where the failure happened, if it relates to a character
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Closed => None,
            LexError::Invariant { position, .. } => Some(*position),
        }
    }
}
