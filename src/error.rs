//! Error types surfaced by the parser and the backend resolvers.
//!
//! Two kinds only: [`ParseError`] for malformed input at the grammar,
//! escape-codec, or literal level, [`ConfigError`] for a well-formed source
//! string whose options are not valid for the selected backend.
//! [`SourceError`] is the union of the two as surfaced by resolvers whose
//! value validation can fail at the literal level (size, boolean). All are
//! terminal for the call that produced them; no partially-built record or
//! config survives.

/// Malformed input at the grammar, literal-codec, or literal-value level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("illegal '\\' terminating literal")]
    TrailingBackslash,
    #[error("partial octal character code; need three digits")]
    PartialOctal,
    #[error("invalid octal character code; must be in [000,377]")]
    OctalOutOfRange,
    #[error("partial hex character code; need two hex digits")]
    PartialHex,
    #[error("unknown escape sequence")]
    UnknownEscape,
    /// `found` is already escaped for display: `'x'` or `end of input`.
    #[error("expected '{expected}', got {found}")]
    Expected { expected: char, found: String },
    #[error("protocol must not be empty")]
    EmptyProtocol,
    #[error("expected ':' after protocol")]
    MissingColon,
    #[error("invalid image size specification: '{0}'\n\t valid specs: vga, qvga, pal, ntsc, <width>x<height>")]
    InvalidSize(String),
    #[error("invalid interlaced/fields setting '{0}' (must be true/false or yes/no)")]
    InvalidBool(String),
}

/// A parsed source whose options (or protocol) are not acceptable to the
/// selected backend. Messages always list the valid alternatives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid option for '{protocol}' protocol: {name}\n\t valid options: {valid}")]
    UnknownOption {
        protocol: &'static str,
        name: String,
        valid: &'static str,
    },
    #[error("invalid end-of-buffer behaviour: {0}\n\t valid options are repeat_last, unset_pending, loop")]
    InvalidOnEnd(String),
    #[error("unknown protocol: {0}\n\t known protocols: files, v4l2, file, dc1394")]
    UnknownProtocol(String),
}

/// Either error kind, for resolution paths that can fail both ways.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
