//! YAML configuration.
//!
//! Every field has a default, so an empty document (or no file at all) is a
//! valid configuration. Command-line flags override file values.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::output::TerminalMode;
use crate::raster::RecursionMode;
use crate::tool::ToolKind;

/// Canvas dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: i32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    64
}
fn default_height() -> i32 {
    32
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

/// Tool selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Tool selected at startup.
    #[serde(default)]
    pub default: ToolKind,

    /// How the recursive fill descends.
    #[serde(default)]
    pub recursion: RecursionMode,
}

/// Terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendering mode.
    #[serde(default)]
    pub mode: TerminalMode,

    /// Character for set pixels in ASCII mode.
    #[serde(default = "default_set_char")]
    pub set_char: char,

    /// Character for unset pixels in ASCII mode.
    #[serde(default = "default_unset_char")]
    pub unset_char: char,
}

fn default_set_char() -> char {
    '#'
}
fn default_unset_char() -> char {
    '.'
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: TerminalMode::default(),
            set_char: default_set_char(),
            unset_char: default_unset_char(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            tools: ToolsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, and
    /// [`Error::Io`] for any other read failure. Parse and validation errors
    /// are as for [`Config::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or if a value is
    /// out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for non-positive canvas dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width <= 0 {
            return Err(Error::ConfigInvalid {
                key: "canvas.width".to_string(),
                message: format!("must be positive, got {}", self.canvas.width),
            });
        }
        if self.canvas.height <= 0 {
            return Err(Error::ConfigInvalid {
                key: "canvas.height".to_string(),
                message: format!("must be positive, got {}", self.canvas.height),
            });
        }
        Ok(())
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Allocate a blank canvas of the configured size.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are not positive.
    pub fn new_canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas.width, self.canvas.height)
    }
}
