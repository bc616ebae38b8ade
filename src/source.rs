//! The parsed form of a source specification string.

use std::fmt;

/// A parsed video source: `protocol:[options]//identifier`.
///
/// Produced once by [`crate::parser::parse`] and read-only afterwards.
/// Options keep insertion order and duplicates; names are lower-cased at
/// parse time, values are kept as written. Resolvers apply last-occurrence-
/// wins when a key repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    /// Non-empty, alphanumeric.
    pub protocol: String,
    pub options: Vec<(String, String)>,
    /// Device path, file path, or opaque token.
    pub identifier: String,
}

/// Canonical display form. Diagnostic only: option values and the identifier
/// are rendered verbatim, so values containing `,`, `]`, `"` or whitespace
/// will not re-parse to the same record.
impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.protocol)?;
        if !self.options.is_empty() {
            write!(f, "[ ")?;
            for (name, value) in &self.options {
                write!(f, "{}={}, ", name, value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "//{}", self.identifier)
    }
}
