//! DDA line rasterization.
//!
//! The loop always runs along the major axis so the per-step change on the
//! minor axis stays within one pixel. Steep lines are handled by swapping the
//! roles of x and y, and endpoints are ordered so the result does not depend
//! on which end was passed first.

use crate::canvas::PixelBuffer;

/// Iterator over the pixels of a DDA-rasterized segment.
///
/// Yields exactly `max(|dx|, |dy|) + 1` pixels in increasing major-axis order.
/// The minor coordinate of each pixel is `(acc + 0.5) as i32`, i.e. rounded
/// half-up and then truncated toward zero.
#[derive(Debug, Clone)]
pub struct DdaLine {
    /// Current major-axis coordinate. Widened so deltas across the whole
    /// `i32` range cannot overflow.
    major: i64,
    /// Last major-axis coordinate (inclusive).
    major_end: i64,
    /// Minor-axis accumulator.
    minor: f64,
    /// Minor-axis increment per step.
    slope: f64,
    /// Whether x and y were exchanged to make x the major axis.
    swapped: bool,
    done: bool,
}

impl DdaLine {
    /// Set up the traversal of the segment from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) =
            (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));

        let swapped = (y1 - y0).abs() > (x1 - x0).abs();
        if swapped {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        // x1 == x0 only when both endpoints coincide.
        // Deltas stay below 2^33, exact in f64.
        let slope = if x1 == x0 { 0.0 } else { (y1 - y0) as f64 / (x1 - x0) as f64 };

        Self { major: x0, major_end: x1, minor: y0 as f64, slope, swapped, done: false }
    }

    /// Returns `true` if the loop runs along y.
    #[must_use]
    pub const fn is_swapped(&self) -> bool {
        self.swapped
    }
}

impl Iterator for DdaLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // major always lies between two i32 endpoints.
        let x = self.major as i32;
        let y = (self.minor + 0.5) as i32;

        if self.major == self.major_end {
            self.done = true;
        } else {
            self.major += 1;
            self.minor += self.slope;
        }

        Some(if self.swapped { (y, x) } else { (x, y) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done { 0 } else { (self.major_end - self.major) as usize + 1 };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DdaLine {}

/// Pixels of the segment from `(x0, y0)` to `(x1, y1)`, in increasing
/// major-axis order.
#[must_use]
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    DdaLine::new(x0, y0, x1, y1).collect()
}

/// Draw a line from `(x0, y0)` to `(x1, y1)` using the DDA algorithm.
///
/// A zero-length segment sets a single pixel. Coordinates are not clipped
/// here; out-of-range pixels are left to the buffer.
///
/// # Example
///
/// ```
/// use raster_tools::canvas::Canvas;
/// use raster_tools::raster::draw_line;
///
/// let mut canvas = Canvas::new(5, 3).unwrap();
/// draw_line(&mut canvas, 0, 0, 4, 2);
/// assert_eq!(canvas.set_points(), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
/// ```
pub fn draw_line<B: PixelBuffer + ?Sized>(buf: &mut B, x0: i32, y0: i32, x1: i32, y1: i32) {
    for (x, y) in DdaLine::new(x0, y0, x1, y1) {
        buf.set_pixel(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    fn sorted(mut points: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
        points.sort_unstable();
        points
    }

    #[test]
    fn test_gentle_slope() {
        assert_eq!(line_points(0, 0, 4, 2), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_steep_slope_swaps_axes() {
        let line = DdaLine::new(0, 0, 2, 4);
        assert!(line.is_swapped());
        assert_eq!(line.collect::<Vec<_>>(), vec![(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_reverse_direction_same_pixels() {
        assert_eq!(sorted(line_points(4, 2, 0, 0)), sorted(line_points(0, 0, 4, 2)));
        assert_eq!(sorted(line_points(2, 4, 0, 0)), sorted(line_points(0, 0, 2, 4)));
    }

    #[test]
    fn test_zero_length_draws_one_pixel() {
        assert_eq!(line_points(3, 7, 3, 7), vec![(3, 7)]);

        let mut canvas = Canvas::new(10, 10).unwrap();
        draw_line(&mut canvas, 3, 7, 3, 7);
        assert_eq!(canvas.set_points(), vec![(3, 7)]);
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(line_points(5, 2, 1, 2), vec![(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(line_points(1, 3, 1, 0), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(line_points(0, 3, 3, 0), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_negative_slope() {
        assert_eq!(line_points(0, 2, 4, 0), vec![(0, 2), (1, 2), (2, 1), (3, 1), (4, 0)]);
    }

    #[test]
    fn test_exact_size() {
        let line = DdaLine::new(0, 0, 10, 3);
        assert_eq!(line.len(), 11);
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let mut line = DdaLine::new(0, 0, 1, i32::MIN);
        assert!(line.is_swapped());
        assert_eq!(line.len(), (1usize << 31) + 1);
        assert_eq!(line.next(), Some((1, i32::MIN)));

        let mut line = DdaLine::new(i32::MAX, 5, i32::MIN, 5);
        assert!(!line.is_swapped());
        assert_eq!(line.len(), 1usize << 32);
        assert_eq!(line.next(), Some((i32::MIN, 5)));

        let line = DdaLine::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(line.size_hint(), (1usize << 32, Some(1usize << 32)));
    }

    #[test]
    fn test_out_of_bounds_clipped_by_canvas() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        draw_line(&mut canvas, 0, 0, 9, 9);
        assert_eq!(canvas.set_points(), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }
}
