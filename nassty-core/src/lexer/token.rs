//! Token types

use super::position::Position;
use serde::Serialize;
use std::fmt;

/// Token classification
///
/// Closed set. The serialized names are the short names the stylesheet
/// toolchain has always used (`S`, `IDENT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[serde(rename = "S")]
    Whitespace,
    #[serde(rename = "IDENT")]
    Identifier,
    #[serde(rename = "COMMENT_ML")]
    MultiLineComment,
    #[serde(rename = "COMMENT_SL")]
    SingleLineComment,
    #[serde(rename = "SLASH")]
    Slash,
    #[serde(rename = "STRING_SQ")]
    SingleQuotedString,
    #[serde(rename = "UNTERMINATED_SQ")]
    UnterminatedSingleQuotedString,
    #[serde(rename = "STRING_DQ")]
    DoubleQuotedString,
    #[serde(rename = "UNTERMINATED_DQ")]
    UnterminatedDoubleQuotedString,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Whitespace,
        TokenKind::Identifier,
        TokenKind::MultiLineComment,
        TokenKind::SingleLineComment,
        TokenKind::Slash,
        TokenKind::SingleQuotedString,
        TokenKind::UnterminatedSingleQuotedString,
        TokenKind::DoubleQuotedString,
        TokenKind::UnterminatedDoubleQuotedString,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "S",
            TokenKind::Identifier => "IDENT",
            TokenKind::MultiLineComment => "COMMENT_ML",
            TokenKind::SingleLineComment => "COMMENT_SL",
            TokenKind::Slash => "SLASH",
            TokenKind::SingleQuotedString => "STRING_SQ",
            TokenKind::UnterminatedSingleQuotedString => "UNTERMINATED_SQ",
            TokenKind::DoubleQuotedString => "STRING_DQ",
            TokenKind::UnterminatedDoubleQuotedString => "UNTERMINATED_DQ",
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::MultiLineComment | TokenKind::SingleLineComment
        )
    }

    /// Quoted strings, terminated or not
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleQuotedString
                | TokenKind::UnterminatedSingleQuotedString
                | TokenKind::DoubleQuotedString
                | TokenKind::UnterminatedDoubleQuotedString
        )
    }

    pub fn is_unterminated(&self) -> bool {
        matches!(
            self,
            TokenKind::UnterminatedSingleQuotedString | TokenKind::UnterminatedDoubleQuotedString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the input
///
/// `text` is exactly what was consumed, delimiters and escapes included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Position of the first character
    #[serde(flatten)]
    pub start: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
        }
    }

    pub fn line(&self) -> usize {
        self.start.line
    }

    pub fn column(&self) -> usize {
        self.start.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.start, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::MultiLineComment.is_comment());
        assert!(TokenKind::SingleLineComment.is_comment());
        assert!(!TokenKind::Slash.is_comment());

        assert!(TokenKind::UnterminatedDoubleQuotedString.is_string());
        assert!(TokenKind::UnterminatedDoubleQuotedString.is_unterminated());
        assert!(!TokenKind::DoubleQuotedString.is_unterminated());
        assert!(!TokenKind::Identifier.is_string());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "a", Position::new(1, 4, 9));
        assert_eq!(token.to_string(), "1:4 IDENT \"a\"");
        assert_eq!(token.line(), 1);
        assert_eq!(token.column(), 4);
    }

    #[test]
    fn test_token_serializes_flat() {
        let token = Token::new(TokenKind::SingleLineComment, "// x", Position::new(0, 2, 2));
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "COMMENT_SL",
                "text": "// x",
                "line": 0,
                "column": 2,
                "offset": 2
            })
        );
    }
}
