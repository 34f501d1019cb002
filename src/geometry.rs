//! Integer geometry on the pixel grid.

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downwards).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the number of king moves between two pixels.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Number of pixels a rasterized segment covers: the major-axis delta plus one.
    #[must_use]
    pub fn pixel_len(&self) -> usize {
        self.start.chebyshev(self.end) as usize + 1
    }
}

/// An axis-aligned rectangle of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a pixel is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));

        x >= left
            && x < left + i64::from(self.width)
            && y >= top
            && y < top + i64::from(self.height)
    }

    /// The four edges of the rectangle's one-pixel outline, clockwise from
    /// the top. Empty for degenerate rectangles.
    #[must_use]
    pub fn outline(&self) -> Vec<Line> {
        if self.width <= 0 || self.height <= 0 {
            return Vec::new();
        }

        // Edges past i32::MAX are pinned to it; no canvas reaches that far.
        let right = self.x.saturating_add(self.width - 1);
        let bottom = self.y.saturating_add(self.height - 1);
        vec![
            Line::from_coords(self.x, self.y, right, self.y),
            Line::from_coords(right, self.y, right, bottom),
            Line::from_coords(right, bottom, self.x, bottom),
            Line::from_coords(self.x, bottom, self.x, self.y),
        ]
    }
}
