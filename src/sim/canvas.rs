//! The shared arena bitmap
//!
//! A square row-major grid of color cells. Coordinates wrap toroidally via a
//! single modulo over the flattened index, not per-axis: an x outside
//! `[0, size)` bleeds into the neighboring row, so the seam couples the axes
//! diagonally. Player positions are wrapped per-axis before they are stored,
//! so only stroke samples near an edge take the diagonal path.

use serde::{Deserialize, Serialize};

/// A packed `0x00RRGGBB` cell color.
///
/// Cell emptiness is tested by exact equality against [`Color::BACKGROUND`],
/// so no player may ever be assigned the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// The designated "empty" sentinel.
    pub const BACKGROUND: Color = Color(0x000000);

    pub const CYAN: Color = Color(0x00f0ff);
    pub const ORANGE: Color = Color(0xff8c00);
    pub const MAGENTA: Color = Color(0xff00d4);
    pub const LIME: Color = Color(0x7fff00);
    pub const YELLOW: Color = Color(0xffd700);
    pub const WHITE: Color = Color(0xf0f0f0);

    #[inline]
    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }
}

/// The arena pixel buffer shared by all players of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelCanvas {
    size: usize,
    cells: Vec<Color>,
}

impl PixelCanvas {
    /// Create a canvas of `size * size` background cells.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "canvas size must be positive");
        Self {
            size,
            cells: vec![Color::BACKGROUND; size * size],
        }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The full pixel buffer, row-major, for blit-to-display.
    #[inline]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Flattened cell index for a point, with toroidal wrap.
    ///
    /// The modulo runs over the whole buffer length: out-of-range coordinates
    /// never panic, they wrap (possibly across a row boundary).
    #[inline]
    pub fn index_of(&self, x: f32, y: f32) -> usize {
        let len = self.cells.len() as i64;
        let raw = (y.floor() as i64) * self.size as i64 + (x.floor() as i64);
        let wrapped = raw.rem_euclid(len) as usize;
        debug_assert!(wrapped < self.cells.len());
        wrapped
    }

    #[inline]
    pub fn get(&self, x: f32, y: f32) -> Color {
        self.cells[self.index_of(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, color: Color) {
        let idx = self.index_of(x, y);
        self.cells[idx] = color;
    }

    /// Paint a cell only if it is still background. Returns whether it wrote.
    ///
    /// First-writer-wins: a non-background cell is never overwritten except
    /// via [`PixelCanvas::clear`].
    #[inline]
    pub fn paint_if_empty(&mut self, x: f32, y: f32, color: Color) -> bool {
        let idx = self.index_of(x, y);
        if self.cells[idx].is_background() {
            self.cells[idx] = color;
            true
        } else {
            false
        }
    }

    /// Reset every cell to the given color.
    pub fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = PixelCanvas::new(16);
        assert_eq!(canvas.cells().len(), 256);
        assert!(canvas.cells().iter().all(|c| c.is_background()));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut canvas = PixelCanvas::new(32);
        canvas.set(5.7, 9.2, Color::CYAN);
        assert_eq!(canvas.get(5.0, 9.0), Color::CYAN);
        assert_eq!(canvas.get(5.9, 9.9), Color::CYAN);
        assert_eq!(canvas.get(6.0, 9.0), Color::BACKGROUND);
    }

    #[test]
    fn test_linear_index_wrap_couples_rows() {
        // x one past the right edge lands at x=1 of the next row.
        let canvas = PixelCanvas::new(400);
        assert_eq!(canvas.index_of(401.0, 100.0), canvas.index_of(1.0, 101.0));
        // Negative x borrows from the previous row.
        assert_eq!(canvas.index_of(-1.0, 100.0), canvas.index_of(399.0, 99.0));
    }

    #[test]
    fn test_whole_buffer_wrap() {
        let canvas = PixelCanvas::new(10);
        // One full buffer length below zero wraps back to the same cell.
        assert_eq!(canvas.index_of(3.0, -10.0), canvas.index_of(3.0, 0.0));
        assert_eq!(canvas.index_of(3.0, 12.0), canvas.index_of(3.0, 2.0));
    }

    #[test]
    fn test_paint_if_empty_first_writer_wins() {
        let mut canvas = PixelCanvas::new(8);
        assert!(canvas.paint_if_empty(2.0, 2.0, Color::CYAN));
        assert!(!canvas.paint_if_empty(2.0, 2.0, Color::ORANGE));
        assert_eq!(canvas.get(2.0, 2.0), Color::CYAN);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut canvas = PixelCanvas::new(8);
        canvas.set(1.0, 1.0, Color::LIME);
        canvas.clear(Color::BACKGROUND);
        assert!(canvas.cells().iter().all(|c| c.is_background()));
    }

    proptest! {
        #[test]
        fn prop_index_always_in_bounds(x in -1e6f32..1e6, y in -1e6f32..1e6) {
            let canvas = PixelCanvas::new(600);
            prop_assert!(canvas.index_of(x, y) < 600 * 600);
        }

        #[test]
        fn prop_in_range_points_index_row_major(x in 0f32..400.0, y in 0f32..400.0) {
            let canvas = PixelCanvas::new(400);
            let expected = y.floor() as usize * 400 + x.floor() as usize;
            prop_assert_eq!(canvas.index_of(x, y), expected);
        }
    }
}
