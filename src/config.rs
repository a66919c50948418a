//! Configuration for the `colorized` command.
//!
//! Read from `<config dir>/colorized/config.toml` (e.g.
//! `~/.config/colorized/config.toml`) or an explicit path. Every field is
//! optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{ColorPair, ColorSpec};
use crate::error::{ConfigError, ParseError};
use crate::style::Style;

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
}

/// Default style and colors used when not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: Style,
    pub fg: ColorSpec,
    pub bg: ColorSpec,
    /// Append a reset after the painted text
    pub reset: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            style: Style::Standard,
            fg: ColorSpec::default(),
            bg: ColorSpec::default(),
            reset: true,
        }
    }
}

impl Defaults {
    /// The configured colors as a pair.
    pub fn colors(&self) -> Result<ColorPair, ParseError> {
        ColorPair::from_specs(self.fg, self.bg)
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("colorized").join("config.toml"))
    }

    /// Load config.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and a missing file yields `Config::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and parse a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
