//! Textual drawing commands.
//!
//! A command is `name:arg,arg,...` with integer arguments:
//!
//! | command                | effect                                   |
//! |------------------------|------------------------------------------|
//! | `line:x0,y0,x1,y1`     | DDA line tool dragged between two points |
//! | `fill:x,y`             | queue-based fill clicked at a point      |
//! | `rfill:x,y`            | recursive fill clicked at a point        |
//! | `rect:x,y,w,h`         | one-pixel rectangle outline (four lines) |

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::tool::{Gesture, ToolKind};

/// A parsed drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw a line.
    Line {
        /// Start x.
        x0: i32,
        /// Start y.
        y0: i32,
        /// End x.
        x1: i32,
        /// End y.
        y1: i32,
    },
    /// Queue-based fill.
    Fill {
        /// Seed x.
        x: i32,
        /// Seed y.
        y: i32,
    },
    /// Recursive fill.
    RecursiveFill {
        /// Seed x.
        x: i32,
        /// Seed y.
        y: i32,
    },
    /// Rectangle outline.
    Rect(Rect),
}

impl Command {
    /// The tool gestures this command expands to.
    #[must_use]
    pub fn gestures(&self) -> Vec<(ToolKind, Gesture)> {
        match *self {
            Self::Line { x0, y0, x1, y1 } => {
                vec![(ToolKind::DdaLine, Gesture::Drag { x0, y0, x1, y1 })]
            }
            Self::Fill { x, y } => vec![(ToolKind::IterativeFill, Gesture::Click { x, y })],
            Self::RecursiveFill { x, y } => {
                vec![(ToolKind::RecursiveFill, Gesture::Click { x, y })]
            }
            Self::Rect(rect) => rect
                .outline()
                .into_iter()
                .map(|edge| {
                    let gesture = Gesture::Drag {
                        x0: edge.start.x,
                        y0: edge.start.y,
                        x1: edge.end.x,
                        y1: edge.end.y,
                    };
                    (ToolKind::DdaLine, gesture)
                })
                .collect(),
        }
    }
}

fn parse_args<const N: usize>(input: &str, args: &str) -> Result<[i32; N]> {
    let values = args
        .split(',')
        .map(|a| a.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::InvalidCommand(format!("'{input}': {e}")))?;

    values.try_into().map_err(|values: Vec<i32>| {
        Error::InvalidCommand(format!("'{input}': expected {N} arguments, got {}", values.len()))
    })
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, args) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::InvalidCommand(format!("'{s}': expected name:args")))?;

        match name.trim() {
            "line" => {
                let [x0, y0, x1, y1] = parse_args::<4>(s, args)?;
                Ok(Self::Line { x0, y0, x1, y1 })
            }
            "fill" => {
                let [x, y] = parse_args::<2>(s, args)?;
                Ok(Self::Fill { x, y })
            }
            "rfill" => {
                let [x, y] = parse_args::<2>(s, args)?;
                Ok(Self::RecursiveFill { x, y })
            }
            "rect" => {
                let [x, y, w, h] = parse_args::<4>(s, args)?;
                Ok(Self::Rect(Rect::new(x, y, w, h)))
            }
            other => Err(Error::InvalidCommand(format!("unknown command '{other}'"))),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { x0, y0, x1, y1 } => write!(f, "line:{x0},{y0},{x1},{y1}"),
            Self::Fill { x, y } => write!(f, "fill:{x},{y}"),
            Self::RecursiveFill { x, y } => write!(f, "rfill:{x},{y}"),
            Self::Rect(r) => write!(f, "rect:{},{},{},{}", r.x, r.y, r.width, r.height),
        }
    }
}
