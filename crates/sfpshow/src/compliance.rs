//! Parser for serialized specification-compliance maps.
//!
//! Platform daemons publish `specification_compliance` as the string form of
//! a flat map, e.g. `{'10/40G Ethernet Compliance Code': '40G Active Cable
//! (XLPPI)'}`. Keys and values are quoted with either quote style and may
//! contain backslash escapes. Nested maps are rejected; the field is flat by
//! contract and anything else is a malformed record.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComplianceError {
    #[error("expected {expected} at byte {pos}")]
    Unexpected { expected: &'static str, pos: usize },

    #[error("unterminated string starting at byte {pos}")]
    UnterminatedString { pos: usize },

    #[error("nested value at byte {pos}, compliance maps are flat")]
    Nested { pos: usize },

    #[error("trailing characters after map at byte {pos}")]
    Trailing { pos: usize },
}

/// Parses a serialized compliance map into key/value pairs.
///
/// Pairs come back in source order; the caller decides presentation order.
pub fn parse_compliance_map(raw: &str) -> Result<Vec<(String, String)>, ComplianceError> {
    let mut cur = Cursor::new(raw);
    cur.skip_ws();
    cur.expect('{', "'{'")?;

    let mut pairs = Vec::new();
    loop {
        cur.skip_ws();
        if cur.eat('}') {
            break;
        }
        let key = cur.parse_string()?;
        cur.skip_ws();
        cur.expect(':', "':'")?;
        cur.skip_ws();
        if cur.peek() == Some('{') {
            return Err(ComplianceError::Nested { pos: cur.pos });
        }
        let value = cur.parse_string()?;
        pairs.push((key, value));

        cur.skip_ws();
        if cur.eat(',') {
            continue;
        }
        cur.expect('}', "',' or '}'")?;
        break;
    }

    cur.skip_ws();
    if cur.peek().is_some() {
        return Err(ComplianceError::Trailing { pos: cur.pos });
    }
    Ok(pairs)
}

/// Character cursor tracking the byte position for error reporting.
struct Cursor<'a> {
    rest: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { rest: input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), ComplianceError> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(ComplianceError::Unexpected { expected, pos: self.pos })
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_whitespace()) {
            self.bump();
        }
    }

    /// Reads a quoted string. A backslash keeps the following character
    /// verbatim, which covers the quote and backslash escapes repr emits.
    fn parse_string(&mut self) -> Result<String, ComplianceError> {
        let start = self.pos;
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => {
                self.bump();
                q
            }
            _ => {
                return Err(ComplianceError::Unexpected { expected: "quoted string", pos: self.pos })
            }
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(ComplianceError::UnterminatedString { pos: start }),
                Some('\\') => match self.bump() {
                    None => return Err(ComplianceError::UnterminatedString { pos: start }),
                    Some(escaped) => out.push(escaped),
                },
                Some(ch) if ch == quote => return Ok(out),
                Some(ch) => out.push(ch),
            }
        }
    }
}
