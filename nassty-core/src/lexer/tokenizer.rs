//! Streaming tokenizer
//!
//! Input arrives in chunks of any size through [`Tokenizer::feed`] or
//! [`Tokenizer::feed_bytes`]; each character is dispatched to the context on
//! top of the stack. Tokens are queued the moment they are complete, so a
//! consumer can pull them while the document is still arriving.
//!
//! ```
//! use nassty_core::lexer::{Emit, TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.feed("a /").unwrap();
//! tokenizer.feed("* x */").unwrap();
//! tokenizer.finish().unwrap();
//!
//! let kinds: Vec<_> = tokenizer.drain().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Whitespace, TokenKind::MultiLineComment]
//! );
//! assert_eq!(tokenizer.next_token(), Emit::Eof);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use nassty_config::LexerConfig;
use nassty_log::{debug, error, trace, warn, Logger};

use super::builder::TokenBuilder;
use super::context::{Context, ContextStack, Quote};
use super::decoder::{Utf8Decoder, REPLACEMENT_CHAR};
use super::error::LexError;
use super::position::{is_whitespace, Newline, Position, PositionTracker, Step};
use super::token::{Token, TokenKind};
use super::trace::{TraceEvent, TraceHook};

/// Result of pulling from the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    Token(Token),
    /// Nothing ready; feed more input or call `finish()`
    Incomplete,
    /// Input is finished and every token has been pulled
    Eof,
}

pub struct Tokenizer {
    tracker: PositionTracker,
    contexts: ContextStack,
    builder: Option<TokenBuilder>,
    output: VecDeque<Token>,
    decoder: Utf8Decoder,
    /// Position of the character being dispatched
    cursor: Position,
    closed: bool,
    trace_chars: bool,
    hook: Option<TraceHook>,
    logger: Arc<Logger>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating tokenizer");
        Self {
            tracker: PositionTracker::new(),
            contexts: ContextStack::new(),
            builder: None,
            output: VecDeque::new(),
            decoder: Utf8Decoder::new(),
            cursor: Position::start(),
            closed: false,
            trace_chars: false,
            hook: None,
            logger,
        }
    }

    pub fn with_config(config: &LexerConfig, logger: Arc<Logger>) -> Self {
        let mut tokenizer = Self::with_logger(logger);
        tokenizer.trace_chars = config.trace_chars;
        tokenizer
    }

    /// Register a callback for char-read and token boundary events.
    ///
    /// The hook only observes; it cannot change the token stream.
    pub fn set_trace_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&TraceEvent<'_>) + Send + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    pub fn clear_trace_hook(&mut self) {
        self.hook = None;
    }

    /// Feed a chunk of text
    pub fn feed(&mut self, chunk: &str) -> Result<(), LexError> {
        self.ensure_open()?;
        trace!(self.logger, "Feeding {} bytes", chunk.len());

        // A text chunk cannot complete a byte sequence left by feed_bytes
        if self.decoder.finish() {
            self.replace_truncated()?;
        }

        for ch in chunk.chars() {
            self.process(ch)?;
        }
        Ok(())
    }

    /// Feed raw UTF-8 bytes. Sequences split across calls are reassembled.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<(), LexError> {
        self.ensure_open()?;
        trace!(self.logger, "Feeding {} raw bytes", bytes.len());

        let mut text = String::with_capacity(bytes.len());
        let invalid = self.decoder.decode(bytes, &mut text);
        if invalid > 0 {
            warn!(
                self.logger,
                "Replaced {} invalid UTF-8 sequence(s) in chunk starting at {}",
                invalid,
                self.tracker.position()
            );
        }

        for ch in text.chars() {
            self.process(ch)?;
        }
        Ok(())
    }

    /// Mark the end of input and flush whatever is still open
    pub fn finish(&mut self) -> Result<(), LexError> {
        self.ensure_open()?;
        trace!(self.logger, "Finishing input at {}", self.tracker.position());

        if self.decoder.finish() {
            self.replace_truncated()?;
        }

        self.cursor = self.tracker.position();
        if let Err(err) = self.flush() {
            self.fail(&err);
            return Err(err);
        }
        self.closed = true;
        Ok(())
    }

    /// Pull the next completed token
    pub fn next_token(&mut self) -> Emit {
        match self.output.pop_front() {
            Some(token) => Emit::Token(token),
            None if self.closed => Emit::Eof,
            None => Emit::Incomplete,
        }
    }

    /// Take every token that is ready
    pub fn drain(&mut self) -> impl Iterator<Item = Token> + '_ {
        self.output.drain(..)
    }

    /// Tokens waiting to be pulled
    pub fn pending(&self) -> usize {
        self.output.len()
    }

    /// No more input is accepted
    pub fn is_finished(&self) -> bool {
        self.closed
    }

    /// Position of the next input character
    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    /// Current context stack depth, 1 when only `General` is active
    pub fn depth(&self) -> usize {
        self.contexts.depth()
    }

    fn ensure_open(&self) -> Result<(), LexError> {
        if self.closed {
            warn!(self.logger, "Input fed to a closed tokenizer");
            return Err(LexError::Closed);
        }
        Ok(())
    }

    fn replace_truncated(&mut self) -> Result<(), LexError> {
        warn!(
            self.logger,
            "Truncated UTF-8 sequence at {} replaced with U+FFFD",
            self.tracker.position()
        );
        self.process(REPLACEMENT_CHAR)
    }

    fn process(&mut self, ch: char) -> Result<(), LexError> {
        let step = self.tracker.step(ch);
        self.cursor = step.position;

        if self.trace_chars {
            trace!(self.logger, "Read {:?} at {}", ch, step.position);
        }
        self.notify(&TraceEvent::CharRead {
            ch,
            position: step.position,
        });

        if let Err(err) = self.dispatch(ch, step) {
            self.fail(&err);
            return Err(err);
        }
        Ok(())
    }

    fn fail(&mut self, err: &LexError) {
        error!(self.logger, "{}", err);
        self.closed = true;
    }

    fn dispatch(&mut self, ch: char, step: Step) -> Result<(), LexError> {
        match self.contexts.top() {
            Context::General => self.read_general(ch, step.position),
            Context::SlashLookahead { start } => self.read_after_slash(ch, step, start),
            Context::MultiLineComment { end_pending } => {
                self.read_multi_line_comment(ch, end_pending)
            }
            Context::SingleLineComment => self.read_single_line_comment(ch, step),
            Context::String {
                quote,
                escape_pending,
            } => self.read_string(ch, quote, escape_pending),
        }
    }

    fn read_general(&mut self, ch: char, position: Position) -> Result<(), LexError> {
        if let Some(quote) = Quote::from_char(ch) {
            self.close_whitespace()?;
            self.open(TokenBuilder::from_char(quote.kind(), position, ch))?;
            self.push(Context::String {
                quote,
                escape_pending: false,
            });
            return Ok(());
        }

        if ch == '/' {
            self.close_whitespace()?;
            self.push(Context::SlashLookahead { start: position });
            return Ok(());
        }

        if is_whitespace(ch) {
            return match self.builder.as_ref().map(TokenBuilder::kind) {
                Some(TokenKind::Whitespace) => self.append(ch),
                Some(kind) => Err(self.invariant(format!("{} token left open", kind))),
                None => self.open(TokenBuilder::from_char(TokenKind::Whitespace, position, ch)),
            };
        }

        self.close_whitespace()?;
        self.open(TokenBuilder::from_char(TokenKind::Identifier, position, ch))?;
        self.close()
    }

    fn read_after_slash(&mut self, ch: char, step: Step, start: Position) -> Result<(), LexError> {
        self.pop()?;
        match ch {
            '*' => {
                self.open(TokenBuilder::new(TokenKind::MultiLineComment, start, "/*"))?;
                self.push(Context::MultiLineComment { end_pending: false });
                Ok(())
            }
            '/' => {
                self.open(TokenBuilder::new(TokenKind::SingleLineComment, start, "//"))?;
                self.push(Context::SingleLineComment);
                Ok(())
            }
            _ => {
                self.emit_slash(start)?;
                self.dispatch(ch, step)
            }
        }
    }

    fn read_multi_line_comment(&mut self, ch: char, end_pending: bool) -> Result<(), LexError> {
        self.expect_open(TokenKind::MultiLineComment)?;
        self.append(ch)?;

        if end_pending && ch == '/' {
            self.pop()?;
            return self.close();
        }
        self.contexts.set_top(Context::MultiLineComment {
            end_pending: ch == '*',
        });
        Ok(())
    }

    fn read_single_line_comment(&mut self, ch: char, step: Step) -> Result<(), LexError> {
        self.expect_open(TokenKind::SingleLineComment)?;

        // A lone CR ended the line; this char belongs to the next one
        if step.follows_cr && step.newline != Newline::PairedLineFeed {
            self.pop()?;
            self.close()?;
            return self.dispatch(ch, step);
        }

        self.append(ch)?;
        if step.newline.completes_line() {
            self.pop()?;
            self.close()?;
        }
        Ok(())
    }

    fn read_string(&mut self, ch: char, quote: Quote, escape_pending: bool) -> Result<(), LexError> {
        self.expect_open(quote.kind())?;
        self.append(ch)?;

        if escape_pending {
            self.contexts.set_top(Context::String {
                quote,
                escape_pending: false,
            });
            return Ok(());
        }

        match ch {
            '\\' => {
                self.contexts.set_top(Context::String {
                    quote,
                    escape_pending: true,
                });
                Ok(())
            }
            '\r' | '\n' | '\x0C' => {
                if let Some(builder) = self.builder.as_mut() {
                    builder.reclassify(quote.unterminated_kind());
                }
                self.pop()?;
                self.close()
            }
            _ if ch == quote.as_char() => {
                self.pop()?;
                self.close()
            }
            _ => Ok(()),
        }
    }

    fn flush(&mut self) -> Result<(), LexError> {
        if let Context::SlashLookahead { start } = self.contexts.top() {
            self.pop()?;
            self.emit_slash(start)?;
        }

        if self.builder.is_some() {
            self.close()?;
        }

        let depth = self.contexts.depth();
        if depth > 1 {
            debug!(
                self.logger,
                "Input ended inside {} context (depth {})",
                self.contexts.top().name(),
                depth
            );
        }
        self.contexts.reset();
        Ok(())
    }

    fn emit_slash(&mut self, start: Position) -> Result<(), LexError> {
        self.open(TokenBuilder::from_char(TokenKind::Slash, start, '/'))?;
        self.close()
    }

    fn close_whitespace(&mut self) -> Result<(), LexError> {
        match self.builder.as_ref().map(TokenBuilder::kind) {
            None => Ok(()),
            Some(TokenKind::Whitespace) => self.close(),
            Some(kind) => Err(self.invariant(format!("{} token left open", kind))),
        }
    }

    fn expect_open(&self, expected: TokenKind) -> Result<(), LexError> {
        match self.builder.as_ref().map(TokenBuilder::kind) {
            Some(kind) if kind == expected => Ok(()),
            Some(kind) => Err(self.invariant(format!("expected open {} token, found {}", expected, kind))),
            None => Err(self.invariant(format!("expected open {} token, none is open", expected))),
        }
    }

    fn open(&mut self, builder: TokenBuilder) -> Result<(), LexError> {
        if let Some(current) = &self.builder {
            return Err(self.invariant(format!(
                "cannot start {} token while {} token is open",
                builder.kind(),
                current.kind()
            )));
        }

        self.notify(&TraceEvent::TokenStart {
            kind: builder.kind(),
            position: builder.start(),
        });
        self.builder = Some(builder);
        Ok(())
    }

    fn append(&mut self, ch: char) -> Result<(), LexError> {
        match self.builder.as_mut() {
            Some(builder) => {
                builder.push(ch);
                Ok(())
            }
            None => Err(self.invariant("no open token to append to")),
        }
    }

    fn close(&mut self) -> Result<(), LexError> {
        let builder = self
            .builder
            .take()
            .ok_or_else(|| self.invariant("no open token to close"))?;
        let token = builder.finish();

        debug!(
            self.logger,
            "Produced token: kind={}, text={:?}, line={}, column={}",
            token.kind,
            token.text,
            token.start.line,
            token.start.column
        );
        self.notify(&TraceEvent::TokenEnd {
            kind: token.kind,
            text: &token.text,
            position: token.start,
        });

        self.output.push_back(token);
        Ok(())
    }

    fn push(&mut self, context: Context) {
        trace!(self.logger, "Entering {} context at {}", context.name(), self.cursor);
        self.contexts.push(context);
    }

    fn pop(&mut self) -> Result<Context, LexError> {
        let context = self
            .contexts
            .pop()
            .ok_or_else(|| self.invariant("general context cannot be popped"))?;
        trace!(self.logger, "Leaving {} context at {}", context.name(), self.cursor);
        Ok(context)
    }

    fn notify(&mut self, event: &TraceEvent<'_>) {
        if let Some(hook) = self.hook.as_mut() {
            hook(event);
        }
    }

    fn invariant(&self, detail: impl Into<String>) -> LexError {
        LexError::invariant(self.contexts.top().name(), self.cursor, detail)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("position", &self.tracker.position())
            .field("context", &self.contexts.top())
            .field("depth", &self.contexts.depth())
            .field("builder", &self.builder)
            .field("pending", &self.output.len())
            .field("closed", &self.closed)
            .finish()
    }
}

/// Pull-based token iterator over a sequence of text chunks.
///
/// Chunks are fed only when the tokenizer runs out of ready tokens; the
/// input is finished once the chunk iterator is exhausted.
pub struct TokenStream<I> {
    chunks: I,
    tokenizer: Tokenizer,
    failed: bool,
}

impl<I> TokenStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(chunks: I) -> Self {
        Self::with_tokenizer(chunks, Tokenizer::new())
    }

    pub fn with_tokenizer(chunks: I, tokenizer: Tokenizer) -> Self {
        Self {
            chunks,
            tokenizer,
            failed: false,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl<I> Iterator for TokenStream<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.tokenizer.next_token() {
                Emit::Token(token) => return Some(Ok(token)),
                Emit::Eof => return None,
                Emit::Incomplete => {
                    let fed = match self.chunks.next() {
                        Some(chunk) => self.tokenizer.feed(chunk.as_ref()),
                        None => self.tokenizer.finish(),
                    };
                    if let Err(err) = fed {
                        self.failed = true;
                        return Some(Err(err));
                    }
                }
            }
        }
    }
}

/// Tokenize a complete document
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_chunks(std::iter::once(input))
}

/// Tokenize a document delivered as separate chunks
pub fn tokenize_chunks<I>(chunks: I) -> Result<Vec<Token>, LexError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TokenStream::new(chunks.into_iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nassty_log::{Level, LogRingBuffer};
    use std::sync::Mutex;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenizer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Tokenizer>();
    }

    #[test]
    fn test_next_token_states() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.next_token(), Emit::Incomplete);

        tokenizer.feed("a ").unwrap();
        match tokenizer.next_token() {
            Emit::Token(token) => assert_eq!(token.text, "a"),
            other => panic!("expected token, got {:?}", other),
        }
        // The whitespace run may continue in the next chunk
        assert_eq!(tokenizer.next_token(), Emit::Incomplete);

        tokenizer.finish().unwrap();
        match tokenizer.next_token() {
            Emit::Token(token) => assert_eq!(token.kind, TokenKind::Whitespace),
            other => panic!("expected token, got {:?}", other),
        }
        assert_eq!(tokenizer.next_token(), Emit::Eof);
        assert_eq!(tokenizer.next_token(), Emit::Eof);
    }

    #[test]
    fn test_tokens_ready_mid_chunk() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.feed("a'b'/*c").unwrap();
        assert_eq!(tokenizer.pending(), 2);
        assert_eq!(tokenizer.depth(), 2);
    }

    #[test]
    fn test_pending_slash_waits_for_next_chunk() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.feed("a/").unwrap();
        assert_eq!(kinds(&tokenizer.drain().collect::<Vec<_>>()), vec![TokenKind::Identifier]);

        tokenizer.feed("/x").unwrap();
        tokenizer.finish().unwrap();
        let tokens: Vec<_> = tokenizer.drain().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::SingleLineComment);
        assert_eq!(tokens[0].text, "//x");
        assert_eq!(tokens[0].column(), 1);
    }

    #[test]
    fn test_slash_flushed_at_finish() {
        let tokens = tokenize("a/").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Slash]);
        assert_eq!(tokens[1].column(), 1);
    }

    #[test]
    fn test_finish_resets_depth() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.feed("\"open").unwrap();
        assert_eq!(tokenizer.depth(), 2);
        tokenizer.finish().unwrap();
        assert_eq!(tokenizer.depth(), 1);
        assert!(tokenizer.is_finished());
    }

    #[test]
    fn test_feed_after_finish() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.finish().unwrap();
        assert_eq!(tokenizer.feed("a"), Err(LexError::Closed));
        assert_eq!(tokenizer.feed_bytes(b"a"), Err(LexError::Closed));
        assert_eq!(tokenizer.finish(), Err(LexError::Closed));
    }

    #[test]
    fn test_invariant_violation_fails_fast() {
        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Error).with_sink(ring.clone());
        let mut tokenizer = Tokenizer::with_logger(logger);

        // String context without its token
        tokenizer.contexts.push(Context::String {
            quote: Quote::Double,
            escape_pending: false,
        });

        let err = tokenizer.feed("x").unwrap_err();
        match &err {
            LexError::Invariant {
                context, position, ..
            } => {
                assert_eq!(*context, "double-quoted string");
                assert_eq!(*position, Position::new(0, 0, 0));
            }
            other => panic!("expected invariant error, got {:?}", other),
        }

        assert!(tokenizer.is_finished());
        assert_eq!(tokenizer.feed("y"), Err(LexError::Closed));

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
        assert!(records[0].message.contains("invariant"));
    }

    #[test]
    fn test_feed_bytes_split_sequence() {
        let bytes = "'é'".as_bytes();
        let mut tokenizer = Tokenizer::new();
        tokenizer.feed_bytes(&bytes[..2]).unwrap();
        tokenizer.feed_bytes(&bytes[2..]).unwrap();
        tokenizer.finish().unwrap();

        let tokens: Vec<_> = tokenizer.drain().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "'é'");
        assert_eq!(tokens[0].kind, TokenKind::SingleQuotedString);
    }

    #[test]
    fn test_truncated_bytes_replaced_at_finish() {
        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());
        let mut tokenizer = Tokenizer::with_logger(logger);

        tokenizer.feed_bytes(b"a\xE4\xB8").unwrap();
        tokenizer.finish().unwrap();

        let texts: Vec<_> = tokenizer.drain().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "\u{FFFD}"]);
        assert!(ring
            .dump_records()
            .iter()
            .any(|r| r.level == Level::Warn && r.message.contains("Truncated")));
    }

    #[test]
    fn test_invalid_bytes_logged() {
        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());
        let mut tokenizer = Tokenizer::with_logger(logger);

        tokenizer.feed_bytes(b"\xFF").unwrap();
        tokenizer.finish().unwrap();

        assert_eq!(tokenizer.drain().next().map(|t| t.text), Some("\u{FFFD}".to_string()));
        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert!(records[0].message.contains("invalid UTF-8"));
    }

    #[test]
    fn test_debug_log_on_token_close() {
        let ring = LogRingBuffer::new(64);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());
        let mut tokenizer = Tokenizer::with_logger(logger);
        tokenizer.feed("a").unwrap();

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Debug);
        assert!(records[0].message.contains("kind=IDENT"));
        assert_eq!(records[0].target, module_path!().trim_end_matches("::tests"));
    }

    #[test]
    fn test_trace_chars_from_config() {
        let ring = LogRingBuffer::new(64);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        let config = LexerConfig { trace_chars: true };
        let mut tokenizer = Tokenizer::with_config(&config, logger);
        tokenizer.feed("ab").unwrap();

        let reads = ring
            .dump_records()
            .iter()
            .filter(|r| r.message.starts_with("Read "))
            .count();
        assert_eq!(reads, 2);
    }

    #[test]
    fn test_no_char_traces_by_default() {
        let ring = LogRingBuffer::new(64);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        let mut tokenizer = Tokenizer::with_logger(logger);
        tokenizer.feed("ab").unwrap();

        assert!(!ring.dump_records().iter().any(|r| r.message.starts_with("Read ")));
    }

    #[test]
    fn test_trace_hook_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();

        let mut tokenizer = Tokenizer::new();
        tokenizer.set_trace_hook(move |event| {
            let line = match event {
                TraceEvent::CharRead { ch, .. } => format!("read {:?}", ch),
                TraceEvent::TokenStart { kind, position } => format!("start {} {}", kind, position),
                TraceEvent::TokenEnd { kind, text, .. } => format!("end {} {:?}", kind, text),
            };
            sink.lock().unwrap().push(line);
        });
        tokenizer.feed("/*").unwrap();
        tokenizer.finish().unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "read '/'".to_string(),
                "read '*'".to_string(),
                "start COMMENT_ML 0:0".to_string(),
                "end COMMENT_ML \"/*\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_token_stream_is_lazy() {
        let fed = Arc::new(Mutex::new(0));
        let counter = fed.clone();
        let chunks = ["a", "b", "c"].into_iter().inspect(move |_| {
            *counter.lock().unwrap() += 1;
        });

        let mut stream = TokenStream::new(chunks);
        let first = stream.next().unwrap().unwrap();
        assert_eq!(first.text, "a");
        assert_eq!(*fed.lock().unwrap(), 1);

        let rest: Vec<_> = stream.map(|t| t.unwrap().text).collect();
        assert_eq!(rest, vec!["b", "c"]);
    }

    #[test]
    fn test_tokenize_chunks_owned_strings() {
        let chunks = vec!["'a".to_string(), "b'".to_string()];
        let tokens = tokenize_chunks(chunks).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "'ab'");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize_chunks(Vec::<&str>::new()).unwrap().is_empty());
    }
}
