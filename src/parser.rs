// src/parser.rs
use crate::errors::QueryError;
use crate::path::{Path, Segment};

/// Cursor over path text. Positions are byte offsets into the input.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// path := segment ("." segment)*
    ///
    /// The empty string is the identity path. There is no whitespace tolerance:
    /// spaces are ordinary key characters.
    pub fn parse_path(&mut self) -> Result<Path, QueryError> {
        let mut segments = Vec::new();
        if self.eof() {
            return Ok(Path { segments });
        }
        loop {
            segments.push(self.parse_segment()?);
            if self.eof() {
                break;
            }
            self.expect('.')?;
        }
        Ok(Path { segments })
    }

    fn parse_segment(&mut self) -> Result<Segment, QueryError> {
        let start = self.i;
        let key = self.capture_key();
        if !self.consume_char('[') {
            return match key {
                "" => Err(self.error_at(start, "empty segment")),
                "$" => Ok(Segment::Root),
                _ => Ok(Segment::Key(key.to_string())),
            };
        }

        let index_start = self.i;
        let index_text = self.capture_until(']')?;
        self.expect(']')?;
        let index = parse_index(index_text).ok_or_else(|| {
            self.error_at(index_start, format!("invalid index `{index_text}`"))
        })?;

        match self.peek_char() {
            None | Some('.') => {}
            Some(c) => return Err(self.error_at(self.i, format!("unexpected `{c}` after index"))),
        }

        if key.is_empty() {
            Ok(Segment::Index(index))
        } else {
            Ok(Segment::KeyIndex(key.to_string(), index))
        }
    }

    /// key := any run of characters not containing "." or "["
    fn capture_key(&mut self) -> &'a str {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '.' || c == '[' {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }

    fn capture_until(&mut self, end: char) -> Result<&'a str, QueryError> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == end {
                return Ok(&self.s[start..self.i]);
            }
            self.i += c.len_utf8();
        }
        Err(self.error_at(self.i, format!("expected '{end}'")))
    }

    fn expect(&mut self, c: char) -> Result<(), QueryError> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(self.error_at(self.i, format!("expected '{c}'")))
        }
    }

    fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    fn error_at(&self, position: usize, message: impl Into<String>) -> QueryError {
        QueryError::Syntax {
            position,
            message: message.into(),
        }
    }
}

/// integer := sequence of decimal digits. Signs, blanks and overflow are rejected.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok()
}
