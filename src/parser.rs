//! Parse source specification strings into [`VideoSource`] records.
//!
//! Grammar:
//!
//! ```text
//! source     := ws protocol ':' [ '[' options ']' ] '//' identifier
//! protocol   := (alnum)+
//! options    := option (',' ws option)*
//! option     := ws name ws [ '=' ws value ]
//! name       := word, lower-cased
//! value      := quoted-literal | word
//! identifier := quoted-literal | path
//! ```
//!
//! Quoted values and identifiers are run through the escape codec; bare
//! paths are taken verbatim.

use crate::error::ParseError;
use crate::escape::unescape;
use crate::lexer::Cursor;
use crate::source::VideoSource;

/// Parse a complete source string. On failure no partial record is produced.
pub fn parse(input: &str) -> Result<VideoSource, ParseError> {
    let mut cur = Cursor::new(input);
    parse_from(&mut cur)
}

/// Parse a source specification from an existing cursor, leaving the cursor
/// just past the identifier.
pub fn parse_from(cur: &mut Cursor<'_>) -> Result<VideoSource, ParseError> {
    cur.skip_whitespace();
    let mut protocol = String::new();
    while let Some(c) = cur.peek() {
        if !c.is_ascii_alphanumeric() {
            break;
        }
        cur.bump();
        protocol.push(c);
    }
    if protocol.is_empty() {
        return Err(ParseError::EmptyProtocol);
    }
    if cur.peek() != Some(':') {
        return Err(ParseError::MissingColon);
    }
    cur.bump();

    let mut options = Vec::new();
    if cur.peek() == Some('[') {
        cur.bump();
        loop {
            cur.skip_whitespace();
            let name = cur.read_word().to_ascii_lowercase();
            cur.skip_whitespace();
            if cur.peek() != Some('=') {
                options.push((name, String::new()));
            } else {
                cur.bump();
                cur.skip_whitespace();
                let value = if cur.peek() == Some('"') {
                    unescape(&cur.read_quoted_literal()?)?
                } else {
                    cur.read_word()
                };
                options.push((name, value));
            }
            cur.skip_whitespace();
            if cur.peek() != Some(',') {
                break;
            }
            cur.bump();
        }
        cur.skip_whitespace();
        cur.expect(']')?;
    }

    cur.expect('/')?;
    cur.expect('/')?;

    let identifier = if cur.peek() == Some('"') {
        unescape(&cur.read_quoted_literal()?)?
    } else {
        cur.read_path()
    };

    Ok(VideoSource {
        protocol,
        options,
        identifier,
    })
}
