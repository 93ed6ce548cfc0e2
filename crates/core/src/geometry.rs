//! Geometry module - rotatable bit masks describing piece shapes
//!
//! A mask is a rectangular grid of booleans stored row-major. Cells are
//! addressed by `(row, column)` or by a [`Point`] where `row = y` and
//! `column = x`. Indexing outside the mask is a programming error and panics.

use std::fmt;

use crate::types::Point;

/// Rectangular grid of occupied/empty cells relative to a piece origin
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    bits: Vec<bool>,
}

impl ShapeMask {
    /// Create an empty mask
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![false; rows * cols],
        }
    }

    /// Build a mask from textual rows, `'1'` marking an occupied cell
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty or not all the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::ShapeMask;
    ///
    /// let t = ShapeMask::from_rows(&["010", "111", "000"]);
    /// assert_eq!(t.width(), 3);
    /// assert!(t.get(1, 0));
    /// assert!(!t.get(0, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "mask needs at least one row");
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "mask rows must have equal length"
        );

        let bits = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| b == b'1'))
            .collect();
        Self {
            rows: rows.len(),
            cols,
            bits,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "mask index ({row}, {col}) out of bounds for {}x{} mask",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` is outside the mask.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[self.index(row, col)]
    }

    /// Set the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` is outside the mask.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let idx = self.index(row, col);
        self.bits[idx] = value;
    }

    /// Get the cell at `p` (`row = p.y`, `col = p.x`)
    ///
    /// # Panics
    ///
    /// Panics when `p` has a negative coordinate or lies outside the mask.
    pub fn get_point(&self, p: Point) -> bool {
        assert!(p.x >= 0 && p.y >= 0, "negative mask coordinate {:?}", p);
        self.get(p.y as usize, p.x as usize)
    }

    /// Rotate 90° clockwise in place
    ///
    /// For an `h x w` mask the result is `w x h` with
    /// `new[r][c] = old[h - 1 - c][r]`. Four rotations restore the original.
    pub fn rotate(&mut self) {
        let (h, w) = (self.rows, self.cols);
        let mut rotated = vec![false; h * w];
        for r in 0..w {
            for c in 0..h {
                rotated[r * h + c] = self.bits[(h - 1 - c) * w + r];
            }
        }
        self.rows = w;
        self.cols = h;
        self.bits = rotated;
    }

    /// Local `(col, row)` offsets of every occupied cell, in row-major order
    pub fn filled(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        let cols = self.cols;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| Point::new((i % cols) as i32, (i / cols) as i32))
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for ShapeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.bits.chunks(self.cols) {
            for &b in row {
                f.write_str(if b { "■" } else { "·" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_square_clockwise() {
        let mut mask = ShapeMask::from_rows(&["100", "100", "110"]);
        mask.rotate();
        assert_eq!(mask, ShapeMask::from_rows(&["111", "100", "000"]));
    }

    #[test]
    fn test_rotate_rectangle_swaps_dimensions() {
        let mut mask = ShapeMask::from_rows(&["1111"]);
        mask.rotate();
        assert_eq!(mask.width(), 1);
        assert_eq!(mask.height(), 4);
        assert!((0..4).all(|r| mask.get(r, 0)));

        let mut l = ShapeMask::from_rows(&["10", "10", "11"]);
        l.rotate();
        assert_eq!(l, ShapeMask::from_rows(&["111", "100"]));
    }

    #[test]
    fn test_four_rotations_restore() {
        let original = ShapeMask::from_rows(&["011", "110", "000"]);
        let mut mask = original.clone();
        for _ in 0..4 {
            mask.rotate();
        }
        assert_eq!(mask, original);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ShapeMask::from_rows(&["11", "11"]);
        let mut copy = original.clone();
        copy.set(0, 0, false);
        assert!(original.get(0, 0));
        assert!(!copy.get(0, 0));
    }

    #[test]
    fn test_filled_offsets() {
        let mask = ShapeMask::from_rows(&["010", "111", "000"]);
        let cells: Vec<Point> = mask.filled().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(mask.count(), 4);
    }

    #[test]
    fn test_get_point_uses_row_y_col_x() {
        let mask = ShapeMask::from_rows(&["001", "000"]);
        assert!(mask.get_point(Point::new(2, 0)));
        assert!(!mask.get_point(Point::new(0, 1)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let mask = ShapeMask::from_rows(&["11", "11"]);
        mask.get(2, 0);
    }

    #[test]
    fn test_display() {
        let mask = ShapeMask::from_rows(&["10", "01"]);
        assert_eq!(mask.to_string(), "■·\n·■\n");
    }
}
