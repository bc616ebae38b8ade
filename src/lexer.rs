//! Low-level cursor over a source string: the tokenizer primitives the
//! grammar parser is built from.

use crate::error::ParseError;
use crate::escape::escape_char;
use std::iter::Peekable;
use std::str::Chars;

/// Position-tracked character cursor. Peekable, forward-only.
pub struct Cursor<'a> {
    iter: Peekable<Chars<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            iter: input.chars().peekable(),
            pos: 0,
        }
    }

    /// Next character without consuming it; `None` at end of input.
    pub fn peek(&mut self) -> Option<char> {
        self.iter.peek().copied()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.iter.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consume the next character if it is exactly `expected`. End of input is
    /// a non-match like any other character.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            found => Err(ParseError::Expected {
                expected,
                found: match found {
                    Some(c) => format!("'{}'", escape_char(c)),
                    None => "end of input".to_string(),
                },
            }),
        }
    }

    /// Consume zero or more whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    /// Consume a `"`-delimited literal, copying its contents verbatim. A
    /// backslash copies itself and the following character, deferring
    /// interpretation to [`crate::escape::unescape`]. Fails on a missing
    /// opening or closing quote.
    pub fn read_quoted_literal(&mut self) -> Result<String, ParseError> {
        let mut value = String::new();
        self.expect('"')?;
        loop {
            match self.peek() {
                None | Some('"') => break,
                Some(c) => {
                    self.bump();
                    value.push(c);
                    if c == '\\' {
                        if let Some(escaped) = self.bump() {
                            value.push(escaped);
                        }
                    }
                }
            }
        }
        self.expect('"')?;
        Ok(value)
    }

    /// Consume a maximal run of alphanumerics or underscore. May be empty;
    /// rejecting emptiness is the caller's business.
    pub fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.bump();
                word.push(c);
            } else {
                break;
            }
        }
        word
    }

    /// Consume a maximal run of printable, non-whitespace characters; used
    /// for unquoted identifiers such as device paths.
    pub fn read_path(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_graphic() {
                self.bump();
                word.push(c);
            } else {
                break;
            }
        }
        word
    }
}
