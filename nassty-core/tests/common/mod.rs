//! Shared helpers for tokenizer integration tests

#![allow(dead_code)]

use nassty_core::lexer::{tokenize, tokenize_chunks, Token, TokenKind, Tokenizer};

/// Comparable view of a token: kind, text, line, column
pub type Lexeme = (TokenKind, String, usize, usize);

pub fn tok(kind: TokenKind, text: &str, line: usize, column: usize) -> Lexeme {
    (kind, text.to_string(), line, column)
}

pub fn lexemes(tokens: &[Token]) -> Vec<Lexeme> {
    tokens
        .iter()
        .map(|t| (t.kind, t.text.clone(), t.line(), t.column()))
        .collect()
}

/// Tokenize a whole document
pub fn lex(input: &str) -> Vec<Lexeme> {
    lexemes(&tokenize(input).expect("tokenize failed"))
}

/// Tokenize a document fed as the given chunks
pub fn lex_chunks<S: AsRef<str>>(chunks: &[S]) -> Vec<Lexeme> {
    lexemes(&tokenize_chunks(chunks.iter().map(|c| c.as_ref())).expect("tokenize failed"))
}

/// Tokenize raw byte chunks through `feed_bytes`
pub fn lex_byte_chunks<B: AsRef<[u8]>>(chunks: &[B]) -> Vec<Lexeme> {
    let mut tokenizer = Tokenizer::new();
    for chunk in chunks {
        tokenizer.feed_bytes(chunk.as_ref()).expect("feed_bytes failed");
    }
    tokenizer.finish().expect("finish failed");
    lexemes(&tokenizer.drain().collect::<Vec<_>>())
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).into_iter().map(|(kind, ..)| kind).collect()
}

/// Split `input` before each char index in `points` (sorted, deduplicated)
pub fn split_at_chars(input: &str, points: &[usize]) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut chunks = Vec::new();
    let mut last = 0;
    for &point in points {
        let point = point.min(chars.len());
        if point < last {
            continue;
        }
        chunks.push(chars[last..point].iter().collect());
        last = point;
    }
    chunks.push(chars[last..].iter().collect());
    chunks
}

/// Split raw bytes at the given byte indices
pub fn split_at_bytes(bytes: &[u8], points: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut last = 0;
    for &point in points {
        let point = point.min(bytes.len());
        if point < last {
            continue;
        }
        chunks.push(bytes[last..point].to_vec());
        last = point;
    }
    chunks.push(bytes[last..].to_vec());
    chunks
}
