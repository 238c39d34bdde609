//! In-progress token buffer

use super::position::Position;
use super::token::{Token, TokenKind};

/// Accumulates the text of the token being scanned.
///
/// [`TokenBuilder::finish`] moves the buffer into the emitted [`Token`].
#[derive(Debug)]
pub struct TokenBuilder {
    kind: TokenKind,
    start: Position,
    text: String,
}

impl TokenBuilder {
    pub fn new(kind: TokenKind, start: Position, text: &str) -> Self {
        Self {
            kind,
            start,
            text: text.to_string(),
        }
    }

    pub fn from_char(kind: TokenKind, start: Position, ch: char) -> Self {
        let mut text = String::with_capacity(ch.len_utf8());
        text.push(ch);
        Self { kind, start, text }
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Change the classification, e.g. a string cut off by a newline
    pub fn reclassify(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> Token {
        Token {
            kind: self.kind,
            text: self.text,
            start: self.start,
        }
    }
}
