//! Error types for raster-tools operations.
//!
//! The rasterization and fill algorithms themselves are total and never fail;
//! errors only arise at the edges of the crate (canvas construction, tool
//! dispatch, command parsing, configuration and output).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-tools operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: i32,
        /// Height value.
        height: i32,
    },

    /// A gesture was handed to a tool that does not accept it.
    #[error("tool '{tool}' does not accept a {gesture} gesture")]
    GestureMismatch {
        /// Name of the tool.
        tool: &'static str,
        /// Kind of gesture that was rejected.
        gesture: &'static str,
    },

    /// A drawing command string could not be parsed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
