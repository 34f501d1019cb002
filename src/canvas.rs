//! Boolean pixel canvas.
//!
//! [`PixelBuffer`] is the capability every tool works against: read a cell,
//! mark a cell, query the bounds. The tools only ever borrow a buffer; they
//! never own or allocate one.
//!
//! [`Canvas`] is the crate's own implementation, a bit-packed grid with one
//! bit per cell stored in row-major order.

use crate::error::{Error, Result};

/// Number of cells packed into one storage word.
const WORD_BITS: usize = u64::BITS as usize;

/// A 2D grid of set/unset cells addressed by integer coordinates.
///
/// Valid coordinates satisfy `0 <= x < width()` and `0 <= y < height()`.
pub trait PixelBuffer {
    /// Returns `true` if the cell at `(x, y)` is set.
    fn get_pixel(&self, x: i32, y: i32) -> bool;

    /// Marks the cell at `(x, y)` as set. Idempotent.
    fn set_pixel(&mut self, x: i32, y: i32);

    /// Width in cells.
    fn width(&self) -> i32;

    /// Height in cells.
    fn height(&self) -> i32;

    /// Returns `true` if `(x, y)` lies inside the buffer.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }
}

/// Bit-packed boolean canvas.
///
/// Out-of-bounds reads report an unset cell and out-of-bounds writes are
/// ignored, so callers may hand it unclipped coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in cells.
    width: i32,
    /// Height in cells.
    height: i32,
    /// Words per row. Padding bits past `width` are always zero.
    stride: usize,
    /// Row-major cell bits.
    words: Vec<u64>,
}

impl Canvas {
    /// Create a new canvas with every cell unset.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is not positive, or if the
    /// packed cells cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_tools::canvas::{Canvas, PixelBuffer};
    ///
    /// let canvas = Canvas::new(80, 24).unwrap();
    /// assert_eq!(canvas.width(), 80);
    /// assert_eq!(canvas.count_set(), 0);
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let too_large = || Error::InvalidDimensions { width, height };

        let stride = (width as usize).div_ceil(WORD_BITS);
        let len = stride.checked_mul(height as usize).ok_or_else(too_large)?;

        let mut words = Vec::new();
        words.try_reserve_exact(len).map_err(|_| too_large())?;
        words.resize(len, 0);

        Ok(Self { width, height, stride, words })
    }

    /// Build a canvas from text rows, `#` marking a set cell and any other
    /// character an unset one.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, or the rows
    /// have different lengths.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count()) as i32;

        let mut canvas = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() as i32 != width {
                return Err(Error::InvalidDimensions { width: row.chars().count() as i32, height });
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    canvas.set_pixel(x as i32, y as i32);
                }
            }
        }

        Ok(canvas)
    }

    /// Render the canvas as text rows using the given characters.
    #[must_use]
    pub fn to_rows_with(&self, set: char, unset: char) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width).map(|x| if self.get_pixel(x, y) { set } else { unset }).collect()
            })
            .collect()
    }

    /// Render the canvas as text rows (`#` set, `.` unset).
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.to_rows_with('#', '.')
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Unset every cell.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Set every cell.
    pub fn fill(&mut self) {
        let full = self.width as usize / WORD_BITS;
        let rem = self.width as usize % WORD_BITS;

        for row in self.words.chunks_exact_mut(self.stride) {
            row[..full].fill(u64::MAX);
            if rem > 0 {
                row[full] = (1u64 << rem) - 1;
            }
        }
    }

    /// Count the set cells.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Coordinates of every set cell in row-major order.
    #[must_use]
    pub fn set_points(&self) -> Vec<(i32, i32)> {
        let mut points = Vec::with_capacity(self.count_set());
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get_pixel(x, y) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    /// Word index and bit mask for a coordinate, `None` if out of bounds.
    #[inline]
    fn bit(&self, x: i32, y: i32) -> Option<(usize, u64)> {
        if !self.contains(x, y) {
            return None;
        }
        let x = x as usize;
        let word = (y as usize) * self.stride + x / WORD_BITS;
        Some((word, 1u64 << (x % WORD_BITS)))
    }
}

impl PixelBuffer for Canvas {
    fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.bit(x, y).is_some_and(|(word, mask)| self.words[word] & mask != 0)
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((word, mask)) = self.bit(x, y) {
            self.words[word] |= mask;
        }
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}
