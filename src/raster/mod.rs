//! Rasterization algorithms over a [`PixelBuffer`].
//!
//! # Algorithms
//!
//! - **DDA line**: steps along the major axis, accumulating the minor-axis offset
//! - **Queue flood fill**: breadth-first 4-connected fill with a FIFO work list
//! - **Recursive flood fill**: depth-first 4-connected fill on the call stack,
//!   plus an explicit-stack rendition of the same traversal

mod fill;
mod line;

pub use fill::{
    flood_fill_depth_first, flood_fill_iterative, flood_fill_iterative_with,
    flood_fill_recursive, FillAlgorithm, FillStats, RecursionMode, WaitingPixel,
};
pub use line::{draw_line, line_points, DdaLine};

use crate::canvas::PixelBuffer;
use crate::geometry::{Line, Point, Rect};

/// Shapes that can rasterize themselves onto a buffer.
pub trait Drawable {
    /// Set this shape's pixels on `buf`.
    fn draw(&self, buf: &mut dyn PixelBuffer);
}

impl Drawable for Point {
    fn draw(&self, buf: &mut dyn PixelBuffer) {
        buf.set_pixel(self.x, self.y);
    }
}

impl Drawable for Line {
    fn draw(&self, buf: &mut dyn PixelBuffer) {
        draw_line(buf, self.start.x, self.start.y, self.end.x, self.end.y);
    }
}

/// Rectangles draw their one-pixel outline.
impl Drawable for Rect {
    fn draw(&self, buf: &mut dyn PixelBuffer) {
        for edge in self.outline() {
            edge.draw(buf);
        }
    }
}
