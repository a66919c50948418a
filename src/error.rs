//! Error types.
//!
//! Writing colorized output never fails on its own; sink errors are plain
//! `std::io::Error`s passed through unchanged. The errors here cover turning
//! text (command-line arguments, config values) into styles and colors, and
//! loading the config file.

use std::path::PathBuf;

/// Errors from parsing a style or color from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown style '{0}' (expected standard, bold, dim, italic, underline or blink)")]
    UnknownStyle(String),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Palette index '{0}' is out of range (0-255)")]
    PaletteOutOfRange(String),

    #[error("Malformed RGB color '{0}' (expected #rrggbb or r,g,b)")]
    MalformedRgb(String),

    #[error("Foreground '{fg}' is {fg_kind} but background '{bg}' is {bg_kind}; both must be the same kind")]
    MixedKinds {
        fg: String,
        fg_kind: &'static str,
        bg: String,
        bg_kind: &'static str,
    },
}

/// Errors from loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
