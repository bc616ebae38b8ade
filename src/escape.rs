//! C-style escape codec for literals in source strings.
//!
//! `escape` renders a single byte printably (used in diagnostics); `unescape`
//! expands named escapes, octal `\nnn` and hex `\hXX` sequences in a quoted
//! literal. Both are pure functions over constant tables, safe to call from
//! any thread.

use crate::error::ParseError;

/// Named escapes, in both directions: (`letter`, decoded char).
const NAMED: &[(char, char)] = &[
    ('a', '\x07'),
    ('b', '\x08'),
    ('f', '\x0c'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\x0b'),
    ('\\', '\\'),
    ('\'', '\''),
    ('"', '"'),
];

/// Printable representation of a byte: a two-character backslash sequence for
/// the named escapes, the byte itself otherwise. Total over all 256 values.
pub fn escape(byte: u8) -> String {
    match byte {
        0x07 => "\\a".to_string(),
        0x08 => "\\b".to_string(),
        0x0c => "\\f".to_string(),
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        b'\t' => "\\t".to_string(),
        0x0b => "\\v".to_string(),
        b'\\' => "\\\\".to_string(),
        b'\'' => "\\'".to_string(),
        b'"' => "\\\"".to_string(),
        b => (b as char).to_string(),
    }
}

/// Printable representation of a char: byte escaping for the Latin-1 range,
/// the char itself beyond it.
pub fn escape_char(c: char) -> String {
    match u32::from(c) {
        code @ 0..=0xff => escape(code as u8),
        _ => c.to_string(),
    }
}

/// Expand all escape sequences in `s`. Single pass, left to right; characters
/// outside an escape are copied verbatim.
pub fn unescape(s: &str) -> Result<String, ParseError> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        if i + 1 == chars.len() {
            return Err(ParseError::TrailingBackslash);
        }
        let escape = chars[i + 1];
        if escape.is_ascii_digit() {
            // Octal: exactly three digits after the backslash.
            if i + 3 >= chars.len() || !is_octal(chars[i + 2]) || !is_octal(chars[i + 3]) {
                return Err(ParseError::PartialOctal);
            }
            let code = digit_val(escape) * 64 + digit_val(chars[i + 2]) * 8 + digit_val(chars[i + 3]);
            if code > 255 {
                return Err(ParseError::OctalOutOfRange);
            }
            out.push(code as u8 as char);
            i += 4;
        } else if escape == 'h' {
            if i + 3 >= chars.len() {
                return Err(ParseError::PartialHex);
            }
            let hi = chars[i + 2].to_digit(16).ok_or(ParseError::PartialHex)?;
            let lo = chars[i + 3].to_digit(16).ok_or(ParseError::PartialHex)?;
            out.push((hi * 16 + lo) as u8 as char);
            i += 4;
        } else {
            match NAMED.iter().find(|(from, _)| *from == escape) {
                Some((_, to)) => out.push(*to),
                None => return Err(ParseError::UnknownEscape),
            }
            i += 2;
        }
    }
    Ok(out)
}

fn is_octal(c: char) -> bool {
    ('0'..='7').contains(&c)
}

fn digit_val(c: char) -> u32 {
    u32::from(c) - u32::from('0')
}
