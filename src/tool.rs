//! Drawing tools.
//!
//! Each tool wraps one algorithm behind the [`Tool`] interface the host UI
//! talks to: a `draw` entry point fed with mouse [`Gesture`]s, a cursor
//! [`ShapeKind`], a draggability flag and a status line. Tools hold no canvas;
//! they borrow one for the duration of each `draw`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canvas::PixelBuffer;
use crate::error::{Error, Result};
use crate::raster::{
    draw_line, flood_fill_depth_first, flood_fill_iterative, flood_fill_recursive, RecursionMode,
};

/// Preview shape the UI draws while a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    /// No preview.
    #[default]
    None,
    /// Rubber-band line from the press point to the cursor.
    Line,
}

/// A completed mouse gesture in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Press and release at one point.
    Click {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },
    /// Press at `(x0, y0)`, release at `(x1, y1)`.
    Drag {
        /// Press x coordinate.
        x0: i32,
        /// Press y coordinate.
        y0: i32,
        /// Release x coordinate.
        x1: i32,
        /// Release y coordinate.
        y1: i32,
    },
}

impl Gesture {
    /// Short name used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::Drag { .. } => "drag",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Click { x, y } => write!(f, "click ({x}, {y})"),
            Self::Drag { x0, y0, x1, y1 } => write!(f, "drag ({x0}, {y0}) -> ({x1}, {y1})"),
        }
    }
}

/// Interface shared by all drawing tools.
pub trait Tool {
    /// Stable identifier, also used in config files.
    fn name(&self) -> &'static str;

    /// Cursor/preview shape.
    fn shape(&self) -> ShapeKind;

    /// Whether the tool reacts to drag gestures.
    fn is_draggable(&self) -> bool;

    /// One-line description for the status bar.
    fn status_text(&self) -> &'static str;

    /// Apply a gesture to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GestureMismatch`] if the tool does not accept this
    /// kind of gesture.
    fn draw(&self, buf: &mut dyn PixelBuffer, gesture: Gesture) -> Result<()>;
}

/// Line tool backed by the DDA rasterizer.
///
/// A click draws the single pixel under the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdaLineTool;

impl Tool for DdaLineTool {
    fn name(&self) -> &'static str {
        "dda-line"
    }

    fn shape(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn is_draggable(&self) -> bool {
        true
    }

    fn status_text(&self) -> &'static str {
        "Tool: DDA-Line (click and drag mouse to draw)"
    }

    fn draw(&self, buf: &mut dyn PixelBuffer, gesture: Gesture) -> Result<()> {
        crate::debug!("tool", "{} {gesture}", self.name());
        match gesture {
            Gesture::Click { x, y } => draw_line(buf, x, y, x, y),
            Gesture::Drag { x0, y0, x1, y1 } => draw_line(buf, x0, y0, x1, y1),
        }
        Ok(())
    }
}

/// Queue-based flood fill tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeFillTool;

impl Tool for IterativeFillTool {
    fn name(&self) -> &'static str {
        "iterative-fill"
    }

    fn shape(&self) -> ShapeKind {
        ShapeKind::None
    }

    fn is_draggable(&self) -> bool {
        false
    }

    fn status_text(&self) -> &'static str {
        "Tool: Non-Recursive Fill (click to fill)"
    }

    fn draw(&self, buf: &mut dyn PixelBuffer, gesture: Gesture) -> Result<()> {
        crate::debug!("tool", "{} {gesture}", self.name());
        let Gesture::Click { x, y } = gesture else {
            return Err(Error::GestureMismatch { tool: self.name(), gesture: gesture.kind_name() });
        };
        flood_fill_iterative(buf, x, y);
        Ok(())
    }
}

/// Recursive flood fill tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveFillTool {
    /// Whether to recurse on the call stack or on an explicit stack.
    pub mode: RecursionMode,
}

impl RecursiveFillTool {
    /// Create the tool with the given recursion mode.
    #[must_use]
    pub const fn new(mode: RecursionMode) -> Self {
        Self { mode }
    }
}

impl Tool for RecursiveFillTool {
    fn name(&self) -> &'static str {
        "recursive-fill"
    }

    fn shape(&self) -> ShapeKind {
        ShapeKind::None
    }

    fn is_draggable(&self) -> bool {
        false
    }

    fn status_text(&self) -> &'static str {
        "Tool: Recursive Fill (click to fill)"
    }

    fn draw(&self, buf: &mut dyn PixelBuffer, gesture: Gesture) -> Result<()> {
        crate::debug!("tool", "{} {gesture} ({:?})", self.name(), self.mode);
        let Gesture::Click { x, y } = gesture else {
            return Err(Error::GestureMismatch { tool: self.name(), gesture: gesture.kind_name() });
        };
        match self.mode {
            RecursionMode::Native => flood_fill_recursive(buf, x, y),
            RecursionMode::ExplicitStack => flood_fill_depth_first(buf, x, y),
        };
        Ok(())
    }
}

/// Tag naming one of the tool variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// [`DdaLineTool`].
    #[default]
    DdaLine,
    /// [`IterativeFillTool`].
    IterativeFill,
    /// [`RecursiveFillTool`].
    RecursiveFill,
}

impl ToolKind {
    /// Every tool variant.
    pub const ALL: [Self; 3] = [Self::DdaLine, Self::IterativeFill, Self::RecursiveFill];

    /// Identifier matching [`Tool::name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DdaLine => "dda-line",
            Self::IterativeFill => "iterative-fill",
            Self::RecursiveFill => "recursive-fill",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::InvalidCommand(format!("unknown tool '{s}'")))
    }
}

/// One instance of every tool, addressed by [`ToolKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Toolbox {
    line: DdaLineTool,
    iterative: IterativeFillTool,
    recursive: RecursiveFillTool,
}

impl Toolbox {
    /// Create a toolbox whose recursive fill uses `mode`.
    #[must_use]
    pub const fn new(mode: RecursionMode) -> Self {
        Self { line: DdaLineTool, iterative: IterativeFillTool, recursive: RecursiveFillTool::new(mode) }
    }

    /// The tool for `kind`.
    #[must_use]
    pub fn get(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::DdaLine => &self.line,
            ToolKind::IterativeFill => &self.iterative,
            ToolKind::RecursiveFill => &self.recursive,
        }
    }
}
