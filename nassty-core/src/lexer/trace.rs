//! Diagnostic trace events

use super::position::Position;
use super::token::TokenKind;

/// Event passed to a tokenizer trace hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    CharRead { ch: char, position: Position },
    TokenStart { kind: TokenKind, position: Position },
    /// `position` is where the token started
    TokenEnd {
        kind: TokenKind,
        text: &'a str,
        position: Position,
    },
}

pub type TraceHook = Box<dyn FnMut(&TraceEvent<'_>) + Send>;
