//! Backend option resolvers: turn the raw option list of a parsed
//! [`VideoSource`] into a typed, defaulted configuration for one backend.
//!
//! Each resolver walks the options once, in order. A recognized key
//! overwrites the field it maps to, so the last occurrence of a repeated key
//! wins. An unrecognized key fails immediately with a [`ConfigError`] listing
//! the backend's valid keys. Integer-valued keys use atoi-style lenient
//! parsing: a leading optionally-signed digit run, 0 when absent. Kept for
//! compatibility with existing source strings.
//!
//! Malformed `size` and `interlaced`/`fields` values are literal-level
//! faults and surface as [`ParseError`]; unknown keys and bad `on_end`
//! values are [`ConfigError`]. Resolvers whose validation can fail both
//! ways return [`SourceError`].

use crate::error::{ConfigError, ParseError, SourceError};
use crate::source::VideoSource;

/// What a frame buffer does when it runs out of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnEndOfBuffer {
    #[default]
    RepeatLastFrame,
    UnsetPending,
    Loop,
}

/// Capture frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: i32,
    pub height: i32,
}

impl ImageSize {
    pub const fn new(width: i32, height: i32) -> Self {
        ImageSize { width, height }
    }
}

/// Configuration for the generic frame-source backend (`files` protocol,
/// image sequences).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSourceConfig {
    pub fps: i32,
    pub read_ahead: i32,
    pub on_end: OnEndOfBuffer,
}

impl Default for FrameSourceConfig {
    fn default() -> Self {
        FrameSourceConfig {
            fps: 30,
            read_ahead: 0,
            on_end: OnEndOfBuffer::RepeatLastFrame,
        }
    }
}

impl FrameSourceConfig {
    pub fn resolve(source: &VideoSource) -> Result<Self, ConfigError> {
        let mut config = FrameSourceConfig::default();
        for (name, value) in &source.options {
            match name.as_str() {
                "fps" => config.fps = lenient_int(value),
                "read_ahead" => {
                    // Bare `read_ahead` means "on, with the stock depth".
                    config.read_ahead = if value.is_empty() { 50 } else { lenient_int(value) };
                }
                "on_end" => config.on_end = parse_on_end(value)?,
                _ => {
                    return Err(ConfigError::UnknownOption {
                        protocol: "files",
                        name: name.clone(),
                        valid: "read_ahead, on_end, fps",
                    })
                }
            }
        }
        Ok(config)
    }
}

/// Configuration for a V4L2-style capture device (`v4l2` protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    pub size: ImageSize,
    pub input: i32,
    pub interlaced: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            size: ImageSize::new(640, 480),
            input: -1,
            interlaced: false,
        }
    }
}

impl CaptureConfig {
    pub fn resolve(source: &VideoSource) -> Result<Self, SourceError> {
        let mut config = CaptureConfig::default();
        for (name, value) in &source.options {
            match name.as_str() {
                "size" => config.size = parse_size(value)?,
                "input" => config.input = lenient_int(value),
                "interlaced" | "fields" => config.interlaced = parse_bool(value)?,
                _ => {
                    return Err(ConfigError::UnknownOption {
                        protocol: "v4l2",
                        name: name.clone(),
                        valid: "size, input, interlaced, fields",
                    }
                    .into())
                }
            }
        }
        Ok(config)
    }
}

/// Configuration for file/container playback (`file` protocol). `read_ahead`
/// stays unset unless given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackConfig {
    pub read_ahead: Option<i32>,
    pub on_end: OnEndOfBuffer,
}

impl PlaybackConfig {
    pub fn resolve(source: &VideoSource) -> Result<Self, ConfigError> {
        let mut config = PlaybackConfig::default();
        for (name, value) in &source.options {
            match name.as_str() {
                "read_ahead" => {
                    config.read_ahead = Some(if value.is_empty() { 50 } else { lenient_int(value) });
                }
                "on_end" => config.on_end = parse_on_end(value)?,
                _ => {
                    return Err(ConfigError::UnknownOption {
                        protocol: "file",
                        name: name.clone(),
                        valid: "read_ahead, on_end",
                    })
                }
            }
        }
        Ok(config)
    }
}

/// Configuration for an IEEE-1394 DV camera (`dc1394` protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DvCameraConfig {
    pub fps: i32,
    pub dma_bufs: i32,
    pub brightness: i32,
    pub exposure: i32,
}

impl Default for DvCameraConfig {
    fn default() -> Self {
        DvCameraConfig {
            fps: 30,
            dma_bufs: 3,
            brightness: -1,
            exposure: -1,
        }
    }
}

impl DvCameraConfig {
    pub fn resolve(source: &VideoSource) -> Result<Self, ConfigError> {
        let mut config = DvCameraConfig::default();
        for (name, value) in &source.options {
            match name.as_str() {
                "fps" => config.fps = lenient_int(value),
                "dma_bufs" | "dma_buffers" => config.dma_bufs = lenient_int(value),
                "brightness" | "bright" => config.brightness = lenient_int(value),
                "exp" | "exposure" => config.exposure = lenient_int(value),
                _ => {
                    return Err(ConfigError::UnknownOption {
                        protocol: "dc1394",
                        name: name.clone(),
                        valid: "dma_bufs, brightness, exposure, fps",
                    })
                }
            }
        }
        Ok(config)
    }
}

/// The closed set of backends, selected by protocol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    FrameSource,
    Capture,
    Playback,
    DvCamera,
}

impl Backend {
    /// Map a protocol name to its backend, `None` for unknown protocols.
    pub fn from_protocol(protocol: &str) -> Option<Backend> {
        match protocol {
            "files" => Some(Backend::FrameSource),
            "v4l2" => Some(Backend::Capture),
            "file" => Some(Backend::Playback),
            "dc1394" => Some(Backend::DvCamera),
            _ => None,
        }
    }

    pub fn resolve(self, source: &VideoSource) -> Result<BackendConfig, SourceError> {
        match self {
            Backend::FrameSource => Ok(BackendConfig::FrameSource(FrameSourceConfig::resolve(source)?)),
            Backend::Capture => Ok(BackendConfig::Capture(CaptureConfig::resolve(source)?)),
            Backend::Playback => Ok(BackendConfig::Playback(PlaybackConfig::resolve(source)?)),
            Backend::DvCamera => Ok(BackendConfig::DvCamera(DvCameraConfig::resolve(source)?)),
        }
    }
}

/// A resolved configuration, tagged by backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendConfig {
    FrameSource(FrameSourceConfig),
    Capture(CaptureConfig),
    Playback(PlaybackConfig),
    DvCamera(DvCameraConfig),
}

impl BackendConfig {
    /// Select the backend from `source.protocol` and resolve its options.
    pub fn resolve(source: &VideoSource) -> Result<BackendConfig, SourceError> {
        let backend = Backend::from_protocol(&source.protocol)
            .ok_or_else(|| ConfigError::UnknownProtocol(source.protocol.clone()))?;
        backend.resolve(source)
    }
}

fn parse_on_end(value: &str) -> Result<OnEndOfBuffer, ConfigError> {
    match value {
        "loop" => Ok(OnEndOfBuffer::Loop),
        "unset_pending" => Ok(OnEndOfBuffer::UnsetPending),
        "repeat_last" => Ok(OnEndOfBuffer::RepeatLastFrame),
        other => Err(ConfigError::InvalidOnEnd(other.to_string())),
    }
}

fn parse_size(value: &str) -> Result<ImageSize, ParseError> {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "vga" => return Ok(ImageSize::new(640, 480)),
        "qvga" => return Ok(ImageSize::new(320, 240)),
        "pal" => return Ok(ImageSize::new(720, 576)),
        "ntsc" => return Ok(ImageSize::new(720, 480)),
        _ => {}
    }
    let bad = || ParseError::InvalidSize(value.to_string());
    let (w, h) = lower.split_once('x').ok_or_else(bad)?;
    let width: i32 = w.trim().parse().map_err(|_| bad())?;
    let height: i32 = h.trim().parse().map_err(|_| bad())?;
    Ok(ImageSize::new(width, height))
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    if value.is_empty() {
        return Ok(true);
    }
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        other => Err(ParseError::InvalidBool(other.to_string())),
    }
}

/// atoi-style parse: skip leading whitespace, optional sign, then a digit
/// run; anything else (including no digits at all) yields 0.
fn lenient_int(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut n: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => n = (n * 10 + i64::from(d)).min(i64::from(i32::MAX) + 1),
            None => break,
        }
    }
    if negative {
        (-n).max(i64::from(i32::MIN)) as i32
    } else {
        n.min(i64::from(i32::MAX)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn lenient_int_basics() {
        assert_eq!(lenient_int("30"), 30);
        assert_eq!(lenient_int("-5"), -5);
        assert_eq!(lenient_int("  12"), 12);
        assert_eq!(lenient_int("25fps"), 25);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int("-"), 0);
    }

    #[test]
    fn lenient_int_clamps_overflow() {
        assert_eq!(lenient_int("99999999999999"), i32::MAX);
        assert_eq!(lenient_int("-99999999999999"), i32::MIN);
    }

    #[test]
    fn size_keywords_case_insensitive() {
        assert_eq!(parse_size("vga").unwrap(), ImageSize::new(640, 480));
        assert_eq!(parse_size("QVGA").unwrap(), ImageSize::new(320, 240));
        assert_eq!(parse_size("Pal").unwrap(), ImageSize::new(720, 576));
        assert_eq!(parse_size("ntsc").unwrap(), ImageSize::new(720, 480));
    }

    #[test]
    fn size_pattern() {
        assert_eq!(parse_size("800x600").unwrap(), ImageSize::new(800, 600));
        assert_eq!(parse_size("1280X720").unwrap(), ImageSize::new(1280, 720));
    }

    #[test]
    fn size_malformed_is_parse_error() {
        assert!(matches!(parse_size("huge"), Err(ParseError::InvalidSize(_))));
        assert!(matches!(parse_size("640x"), Err(ParseError::InvalidSize(_))));
        assert!(matches!(parse_size("x480"), Err(ParseError::InvalidSize(_))));
    }

    #[test]
    fn bool_keywords() {
        assert_eq!(parse_bool("").unwrap(), true);
        assert_eq!(parse_bool("true").unwrap(), true);
        assert_eq!(parse_bool("YES").unwrap(), true);
        assert_eq!(parse_bool("false").unwrap(), false);
        assert_eq!(parse_bool("No").unwrap(), false);
        assert!(matches!(parse_bool("maybe"), Err(ParseError::InvalidBool(_))));
    }

    #[test]
    fn capture_bad_literals_surface_as_parse_errors() {
        // Malformed size/boolean values are literal-level faults, unlike
        // unknown keys which stay config-level.
        let vs = parse("v4l2:[size=huge]//dev/video0").unwrap();
        assert!(matches!(
            CaptureConfig::resolve(&vs),
            Err(SourceError::Parse(ParseError::InvalidSize(_)))
        ));
        let vs = parse("v4l2:[interlaced=maybe]//dev/video0").unwrap();
        assert!(matches!(
            CaptureConfig::resolve(&vs),
            Err(SourceError::Parse(ParseError::InvalidBool(_)))
        ));
        let vs = parse("v4l2:[bogus=1]//dev/video0").unwrap();
        assert!(matches!(
            CaptureConfig::resolve(&vs),
            Err(SourceError::Config(ConfigError::UnknownOption { .. }))
        ));
    }

    #[test]
    fn frame_source_defaults() {
        let vs = parse("files://img_%03d.png").unwrap();
        let config = FrameSourceConfig::resolve(&vs).unwrap();
        assert_eq!(config, FrameSourceConfig::default());
        assert_eq!(config.fps, 30);
        assert_eq!(config.read_ahead, 0);
        assert_eq!(config.on_end, OnEndOfBuffer::RepeatLastFrame);
    }

    #[test]
    fn frame_source_bare_read_ahead_is_50() {
        let vs = parse("files:[read_ahead]//img_%03d.png").unwrap();
        let config = FrameSourceConfig::resolve(&vs).unwrap();
        assert_eq!(config.read_ahead, 50);
    }

    #[test]
    fn frame_source_on_end_values() {
        let vs = parse("files:[on_end=loop]//x").unwrap();
        assert_eq!(FrameSourceConfig::resolve(&vs).unwrap().on_end, OnEndOfBuffer::Loop);
        let vs = parse("files:[on_end=unset_pending]//x").unwrap();
        assert_eq!(
            FrameSourceConfig::resolve(&vs).unwrap().on_end,
            OnEndOfBuffer::UnsetPending
        );
        let vs = parse("files:[on_end=sideways]//x").unwrap();
        assert!(matches!(
            FrameSourceConfig::resolve(&vs),
            Err(ConfigError::InvalidOnEnd(_))
        ));
    }

    #[test]
    fn frame_source_on_end_is_case_sensitive() {
        let vs = parse("files:[on_end=Loop]//x").unwrap();
        assert!(matches!(
            FrameSourceConfig::resolve(&vs),
            Err(ConfigError::InvalidOnEnd(_))
        ));
    }

    #[test]
    fn capture_unknown_key_lists_valid_set() {
        let vs = parse("v4l2:[bogus=1]//dev/video0").unwrap();
        let err = CaptureConfig::resolve(&vs).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"), "message: {}", msg);
        assert!(msg.contains("size, input, interlaced, fields"), "message: {}", msg);
    }

    #[test]
    fn capture_fields_alias() {
        let vs = parse("v4l2:[fields=yes]//dev/video0").unwrap();
        assert!(CaptureConfig::resolve(&vs).unwrap().interlaced);
    }

    #[test]
    fn last_occurrence_wins() {
        let vs = parse("v4l2:[size=vga, size=qvga, input=1, input=2]//dev/video0").unwrap();
        let config = CaptureConfig::resolve(&vs).unwrap();
        assert_eq!(config.size, ImageSize::new(320, 240));
        assert_eq!(config.input, 2);
    }

    #[test]
    fn playback_read_ahead_unset_by_default() {
        let vs = parse("file://movie.avi").unwrap();
        let config = PlaybackConfig::resolve(&vs).unwrap();
        assert_eq!(config.read_ahead, None);
        let vs = parse("file:[read_ahead]//movie.avi").unwrap();
        assert_eq!(PlaybackConfig::resolve(&vs).unwrap().read_ahead, Some(50));
        let vs = parse("file:[read_ahead=10]//movie.avi").unwrap();
        assert_eq!(PlaybackConfig::resolve(&vs).unwrap().read_ahead, Some(10));
    }

    #[test]
    fn playback_rejects_fps() {
        let vs = parse("file:[fps=30]//movie.avi").unwrap();
        assert!(matches!(
            PlaybackConfig::resolve(&vs),
            Err(ConfigError::UnknownOption { .. })
        ));
    }

    #[test]
    fn dv_camera_aliases_and_defaults() {
        let vs = parse("dc1394://0").unwrap();
        let config = DvCameraConfig::resolve(&vs).unwrap();
        assert_eq!(config, DvCameraConfig::default());
        let vs = parse("dc1394:[dma_buffers=8, bright=128, exp=200]//0").unwrap();
        let config = DvCameraConfig::resolve(&vs).unwrap();
        assert_eq!(config.dma_bufs, 8);
        assert_eq!(config.brightness, 128);
        assert_eq!(config.exposure, 200);
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn backend_dispatch_by_protocol() {
        assert_eq!(Backend::from_protocol("files"), Some(Backend::FrameSource));
        assert_eq!(Backend::from_protocol("v4l2"), Some(Backend::Capture));
        assert_eq!(Backend::from_protocol("file"), Some(Backend::Playback));
        assert_eq!(Backend::from_protocol("dc1394"), Some(Backend::DvCamera));
        assert_eq!(Backend::from_protocol("rtsp"), None);
    }

    #[test]
    fn backend_config_resolve_unknown_protocol() {
        let vs = parse("rtsp://camera.local/stream").unwrap();
        assert!(matches!(
            BackendConfig::resolve(&vs),
            Err(SourceError::Config(ConfigError::UnknownProtocol(_)))
        ));
    }
}
