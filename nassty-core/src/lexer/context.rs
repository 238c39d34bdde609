//! Lexical contexts
//!
//! The top of the [`ContextStack`] decides how the next character is read.
//! `General` sits at the bottom and is never popped.

use super::position::Position;
use super::token::TokenKind;

/// Quote style of a string context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }

    /// The terminating character
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    pub fn kind(self) -> TokenKind {
        match self {
            Quote::Single => TokenKind::SingleQuotedString,
            Quote::Double => TokenKind::DoubleQuotedString,
        }
    }

    pub fn unterminated_kind(self) -> TokenKind {
        match self {
            Quote::Single => TokenKind::UnterminatedSingleQuotedString,
            Quote::Double => TokenKind::UnterminatedDoubleQuotedString,
        }
    }
}

/// Active lexical state with the transient flags it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    General,
    /// A `/` was read at `start`; the next char decides slash vs comment
    SlashLookahead { start: Position },
    /// `end_pending`: the last char appended was a `*` of the body
    MultiLineComment { end_pending: bool },
    SingleLineComment,
    String { quote: Quote, escape_pending: bool },
}

impl Context {
    pub fn name(&self) -> &'static str {
        match self {
            Context::General => "general",
            Context::SlashLookahead { .. } => "slash-lookahead",
            Context::MultiLineComment { .. } => "multi-line comment",
            Context::SingleLineComment => "single-line comment",
            Context::String {
                quote: Quote::Single,
                ..
            } => "single-quoted string",
            Context::String {
                quote: Quote::Double,
                ..
            } => "double-quoted string",
        }
    }
}

/// Stack of contexts; never shallower than `[General]`
#[derive(Debug, Clone)]
pub struct ContextStack {
    stack: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Context::General],
        }
    }

    pub fn top(&self) -> Context {
        self.stack.last().copied().unwrap_or(Context::General)
    }

    /// Replace the top context, used to update its flags
    pub fn set_top(&mut self, context: Context) {
        if self.stack.len() > 1 {
            if let Some(top) = self.stack.last_mut() {
                *top = context;
            }
        }
    }

    pub fn push(&mut self, context: Context) {
        self.stack.push(context);
    }

    /// Pop the top context. Returns `None` instead of popping `General`.
    pub fn pop(&mut self) -> Option<Context> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Drop everything above `General`
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}
