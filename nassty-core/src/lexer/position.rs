//! Source position tracking
//!
//! Lines and columns are 0-based. The column counts Unicode scalar values
//! since the last line advance; `offset` is the UTF-8 byte offset from the
//! start of the input.
//!
//! Newline conventions are folded into line-advance events:
//! - LF and FF advance the line
//! - CR advances the line immediately and leaves a pending flag
//! - an LF right after a CR completes the pair without a second advance

use serde::Serialize;

/// Position of a character in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Byte offset, 0-based
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Start of input
    pub fn start() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// How a character takes part in line breaking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    /// Not a line terminator
    None,
    /// CR: the line has advanced, an LF may still complete the pair
    CarriageReturn,
    /// LF or FF that advanced the line on its own
    LineFeed,
    /// LF closing a CR LF pair; the CR already advanced the line
    PairedLineFeed,
}

impl Newline {
    /// True once a line terminator sequence is complete.
    ///
    /// A CR alone is not complete until the next character shows it is not
    /// followed by LF.
    pub fn completes_line(self) -> bool {
        matches!(self, Newline::LineFeed | Newline::PairedLineFeed)
    }
}

/// Result of feeding one character to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Where the character sits
    pub position: Position,
    pub newline: Newline,
    /// The previous character was an unpaired CR
    pub follows_cr: bool,
}

/// Tracks the position of the next character
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    next: Position,
    cr_pending: bool,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position the next character will occupy
    pub fn position(&self) -> Position {
        self.next
    }

    pub fn cr_pending(&self) -> bool {
        self.cr_pending
    }

    /// Consume `ch`, returning its position and line-break role
    pub fn step(&mut self, ch: char) -> Step {
        let position = self.next;
        let follows_cr = std::mem::replace(&mut self.cr_pending, false);

        let newline = match ch {
            '\n' if follows_cr => Newline::PairedLineFeed,
            '\n' | '\x0C' => Newline::LineFeed,
            '\r' => {
                self.cr_pending = true;
                Newline::CarriageReturn
            }
            _ => Newline::None,
        };

        self.next.offset += ch.len_utf8();
        match newline {
            Newline::None => self.next.column += 1,
            Newline::PairedLineFeed => self.next.column = 0,
            Newline::CarriageReturn | Newline::LineFeed => {
                self.next.line += 1;
                self.next.column = 0;
            }
        }

        Step {
            position,
            newline,
            follows_cr,
        }
    }
}

/// Space, tab, CR, LF and FF
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0C')
}
