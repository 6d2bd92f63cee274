//! Token input
//!
//! The session never touches stdin directly; it reads through a
//! [`TokenSource`] so tests can drive it from memory.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of whitespace-delimited tokens
pub trait TokenSource {
    /// Next token, blocking until one is available. `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Line-buffered tokenizer over any `BufRead`
///
/// Several tokens typed on one line are handed out one per call.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Invalid UTF-8 becomes U+FFFD and is rejected later as a bad token
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

/// Quit sentinel: `q` in either case
pub fn is_quit(token: &str) -> bool {
    token.eq_ignore_ascii_case("q")
}
