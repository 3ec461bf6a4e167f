// src/parser.rs

/// Scan cursor over a single expression string.
///
/// Holds the byte offset of the character currently looked at. The cursor
/// only ever moves forward.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
    ch: Option<char>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            ch: s.chars().next(),
        }
    }

    /// Step past the current character.
    pub fn next_char(&mut self) {
        if let Some(c) = self.ch {
            self.i += c.len_utf8();
            self.ch = self.s[self.i..].chars().next();
        }
    }

    /// Consume `c` if it is the next non-space character.
    ///
    /// Spaces are skipped lazily here and nowhere else; only the space
    /// character counts, tabs and newlines do not.
    pub fn eat(&mut self, c: char) -> bool {
        while self.ch == Some(' ') {
            self.next_char();
        }
        if self.ch == Some(c) {
            self.next_char();
            true
        } else {
            false
        }
    }

    /// Longest run of digits and dots starting here, dots unchecked.
    pub fn scan_number(&mut self) -> &'a str {
        let start = self.i;
        while self.peek_char().is_some_and(is_number_char) {
            self.next_char();
        }
        &self.s[start..self.i]
    }

    pub fn peek_char(&self) -> Option<char> {
        self.ch
    }

    pub fn position(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}

pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
