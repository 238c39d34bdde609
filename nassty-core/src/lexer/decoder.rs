//! Incremental UTF-8 decoding
//!
//! Byte chunks may end in the middle of a multi-byte sequence. The decoder
//! keeps that tail until the next chunk completes it. Invalid bytes are
//! replaced with U+FFFD, one replacement per maximal invalid subpart.

/// Unicode replacement character
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Length of the UTF-8 sequence introduced by `lead`, or `None` for a
/// byte that cannot start one
pub fn utf8_sequence_length(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    pending: [u8; 4],
    len: usize,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of an incomplete sequence are waiting for more input
    pub fn has_pending(&self) -> bool {
        self.len > 0
    }

    /// Decode `bytes` onto `out`.
    ///
    /// Returns the number of replacement characters written for invalid
    /// input. An incomplete trailing sequence is held back, not replaced.
    pub fn decode(&mut self, bytes: &[u8], out: &mut String) -> usize {
        let joined;
        let mut input: &[u8] = if self.len > 0 {
            joined = [&self.pending[..self.len], bytes].concat();
            self.len = 0;
            &joined
        } else {
            bytes
        };

        let mut invalid = 0;
        loop {
            match std::str::from_utf8(input) {
                Ok(text) => {
                    out.push_str(text);
                    return invalid;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        out.push_str(text);
                    }
                    match err.error_len() {
                        Some(bad) => {
                            out.push(REPLACEMENT_CHAR);
                            invalid += 1;
                            input = &rest[bad..];
                        }
                        None => {
                            // Truncated sequence; at most three bytes
                            self.pending[..rest.len()].copy_from_slice(rest);
                            self.len = rest.len();
                            return invalid;
                        }
                    }
                }
            }
        }
    }

    /// Drop a pending truncated sequence. Returns true if there was one;
    /// the caller substitutes a single U+FFFD for it.
    pub fn finish(&mut self) -> bool {
        let had_pending = self.len > 0;
        self.len = 0;
        had_pending
    }
}
