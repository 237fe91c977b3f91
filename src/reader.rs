//! Line tokenizer and the reader that feeds tokenized commands to the interpreter.

use std::io::{self, BufRead};

/// True for characters that separate tokens: ASCII whitespace (vertical tab
/// included) and commas.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ',')
}

/// Splits a raw line into tokens, uppercasing ASCII letters only.
///
/// Any run of whitespace and/or commas separates tokens; empty tokens are
/// dropped, so a blank or all-separator line yields an empty vector.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(is_separator)
        .filter(|tok| !tok.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Pulls lines from a text source until one of them holds a command.
#[derive(Debug)]
pub struct CommandReader<R> {
    source: R,
    buf: Vec<u8>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: Vec::new(),
        }
    }

    /// Returns the next non-empty token sequence.
    ///
    /// Blank lines are skipped. An empty vector means the source is exhausted.
    /// Bytes that are not valid UTF-8 are replaced rather than treated as an error.
    pub fn read_command(&mut self) -> io::Result<Vec<String>> {
        loop {
            self.buf.clear();
            if self.source.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(Vec::new());
            }
            let tokens = tokenize(&String::from_utf8_lossy(&self.buf));
            if !tokens.is_empty() {
                return Ok(tokens);
            }
        }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_command() {
            Ok(tokens) if tokens.is_empty() => None,
            other => Some(other),
        }
    }
}
