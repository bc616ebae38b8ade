//! # vidsource — Video Source Specification DSL
//!
//! A small DSL for describing video capture sources as a single string,
//! plus per-backend validation of the parsed options into typed
//! configuration structs.
//!
//! ## Source strings
//!
//! ```text
//! protocol:[options]//identifier
//! ```
//!
//! - **protocol**: alphanumeric backend name (`files`, `v4l2`, `file`, `dc1394`)
//! - **options**: optional `[name=value, ...]` block; names are lower-cased,
//!   values may be bare words or `"quoted literals"` with C-style escapes
//!   (named, octal `\nnn`, hex `\hXX`)
//! - **identifier**: device path, file path, or opaque token; quotable
//!
//! ## Example
//!
//! ```
//! use vidsource::{parse, BackendConfig};
//!
//! let vs = parse("v4l2:[size=vga, input=1]//dev/video0").unwrap();
//! assert_eq!(vs.protocol, "v4l2");
//! assert_eq!(vs.identifier, "dev/video0");
//! let config = BackendConfig::resolve(&vs).unwrap();
//! assert!(matches!(config, BackendConfig::Capture(_)));
//! ```
//!
//! Parsing and resolution are pure and reentrant; this crate never touches a
//! device or decoder. Opening the configured source belongs to the caller.

pub mod backend;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod parser;
pub mod source;

pub use backend::{
    Backend, BackendConfig, CaptureConfig, DvCameraConfig, FrameSourceConfig, ImageSize,
    OnEndOfBuffer, PlaybackConfig,
};
pub use error::{ConfigError, ParseError, SourceError};
pub use escape::{escape, unescape};
pub use lexer::Cursor;
pub use parser::{parse, parse_from};
pub use source::VideoSource;
