//! # raster-tools
//!
//! Classic raster-graphics tools over a boolean pixel canvas: DDA line
//! rasterization and 4-connected flood fill, both queue-based and recursive.
//!
//! The algorithms work against the [`PixelBuffer`](canvas::PixelBuffer) trait
//! and only ever borrow the buffer, so any grid of set/unset cells can host
//! them. [`Canvas`](canvas::Canvas) is the bundled implementation.
//!
//! ## Quick Start
//!
//! ```
//! use raster_tools::prelude::*;
//!
//! let mut canvas = Canvas::new(8, 6).unwrap();
//! let mut editor = Editor::new(&mut canvas);
//!
//! // Outline a room, then flood its inside
//! editor.run(&"rect:1,1,6,4".parse().unwrap()).unwrap();
//! editor.select(ToolKind::IterativeFill);
//! editor.click(3, 2).unwrap();
//!
//! assert_eq!(canvas.count_set(), 24);
//! ```
//!
//! ## Academic References
//!
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*, 2nd ed. Addison-Wesley.
//!   Sections 3.2 (scan converting lines) and 19.5 (flood fill).

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Logging
// ============================================================================

/// Debug logging to stderr.
#[macro_use]
pub mod debug;

// ============================================================================
// Core Modules
// ============================================================================

/// Boolean pixel canvas and the buffer trait the tools draw on.
pub mod canvas;

/// Integer geometry on the pixel grid.
pub mod geometry;

/// Line rasterization and flood fill.
pub mod raster;

// ============================================================================
// Tool Modules
// ============================================================================

/// Drawing tools and gestures.
pub mod tool;

/// Textual drawing commands.
pub mod command;

/// Tool session over a borrowed canvas.
pub mod editor;

// ============================================================================
// Configuration & Output
// ============================================================================

/// YAML configuration.
pub mod config;

/// Output encoders (terminal, PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-tools operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_tools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, PixelBuffer};
    pub use crate::command::Command;
    pub use crate::config::Config;
    pub use crate::editor::Editor;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{
        draw_line, flood_fill_depth_first, flood_fill_iterative, flood_fill_recursive, Drawable,
        FillAlgorithm, FillStats, RecursionMode,
    };
    pub use crate::tool::{Gesture, ShapeKind, Tool, ToolKind};
}
