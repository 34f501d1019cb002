//! Terminal output encoder.
//!
//! Renders a canvas as text. Two modes:
//! - ASCII: one character per pixel, configurable set/unset characters
//! - Unicode: half-block characters (▀ ▄ █), two pixel rows per line

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, PixelBuffer};
use crate::config::OutputConfig;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalMode {
    /// One character per pixel (widest compatibility)
    #[default]
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    UnicodeHalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    set_char: char,
    unset_char: char,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), set_char: '#', unset_char: '.', invert: false }
    }

    /// Create an encoder from the `output` section of the config.
    #[must_use]
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new().mode(config.mode).chars(config.set_char, config.unset_char)
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the characters used for set and unset pixels in ASCII mode.
    #[must_use]
    pub fn chars(mut self, set: char, unset: char) -> Self {
        self.set_char = set;
        self.unset_char = unset;
        self
    }

    /// Swap the rendering of set and unset pixels.
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a canvas to a string, one line per text row.
    #[must_use]
    pub fn render(&self, canvas: &Canvas) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(canvas),
            TerminalMode::UnicodeHalfBlock => self.render_half_block(canvas),
        }
    }

    #[inline]
    fn is_lit(&self, canvas: &Canvas, x: i32, y: i32) -> bool {
        canvas.get_pixel(x, y) != self.invert
    }

    fn render_ascii(&self, canvas: &Canvas) -> String {
        let mut output =
            String::with_capacity((canvas.width() as usize + 1) * canvas.height() as usize);

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                output.push(if self.is_lit(canvas, x, y) { self.set_char } else { self.unset_char });
            }
            output.push('\n');
        }

        output
    }

    /// Each character covers two vertical pixels; an odd last row pairs with
    /// an unlit row below the canvas.
    fn render_half_block(&self, canvas: &Canvas) -> String {
        let lines = (canvas.height() as usize).div_ceil(2);
        let mut output = String::with_capacity((canvas.width() as usize * 3 + 1) * lines);

        for y in (0..canvas.height()).step_by(2) {
            for x in 0..canvas.width() {
                let top = self.is_lit(canvas, x, y);
                let bottom = y + 1 < canvas.height() && self.is_lit(canvas, x, y + 1);
                output.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            output.push('\n');
        }

        output
    }

    /// Write output directly to stdout.
    pub fn print(&self, canvas: &Canvas) {
        print!("{}", self.render(canvas));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Canvas {
        Canvas::from_rows(&["#..", ".#.", "..#"]).expect("rows are rectangular")
    }

    #[test]
    fn test_ascii_render_basic() {
        let output = TerminalEncoder::new().render(&sample());
        assert_eq!(output, "#..\n.#.\n..#\n");
    }

    #[test]
    fn test_ascii_custom_chars() {
        let output = TerminalEncoder::new().chars('@', ' ').render(&sample());
        assert_eq!(output, "@  \n @ \n  @\n");
    }

    #[test]
    fn test_invert_mode() {
        let output = TerminalEncoder::new().invert(true).render(&sample());
        assert_eq!(output, ".##\n#.#\n##.\n");
    }

    #[test]
    fn test_half_block_pairs_rows() {
        let encoder = TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock);
        let output = encoder.render(&sample());
        let lines: Vec<&str> = output.lines().collect();

        // 3 rows fold into 2 lines
        assert_eq!(lines, vec!["▀▄ ", "  ▀"]);
    }

    #[test]
    fn test_half_block_full() {
        let mut canvas = Canvas::new(2, 2).expect("positive dimensions");
        canvas.fill();

        let output = TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).render(&canvas);
        assert_eq!(output, "██\n");
    }

    #[test]
    fn test_from_config() {
        let config = OutputConfig { set_char: 'x', unset_char: '-', ..OutputConfig::default() };
        let output = TerminalEncoder::from_config(&config).render(&sample());
        assert!(output.starts_with("x--\n"));
    }
}
