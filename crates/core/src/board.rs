//! Board module - manages the game grid and the active piece
//!
//! The board is a `width x height` grid where each cell is either filled or
//! empty. Uses a flat row-major array for cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).
//!
//! All movement and rotation reduces to one predicate: a cell is illegal if it
//! lies outside the grid or is already filled. Every mutating operation either
//! fully succeeds or leaves the board untouched.

use crate::piece::Piece;
use crate::types::{Direction, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board with its fixed cells and the currently falling piece
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
    active: Option<Piece>,
    redraw: bool,
}

impl Board {
    /// Create a new empty board with the default 10x20 dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board; each side is at least one cell
    pub fn with_size(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            cells: vec![false; width * height],
            active: None,
            redraw: false,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, filled: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32
    }

    /// Check if position is legal for a piece cell (within bounds and empty)
    pub fn is_valid(&self, p: Point) -> bool {
        matches!(self.get(p.x, p.y), Some(false))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c))
    }

    /// Cells of row `y`, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Install a new active piece and compute its ghost
    pub fn set_active(&mut self, mut piece: Piece) {
        piece.ghost = Some(Box::new(self.ghost_projection(&piece)));
        self.active = Some(piece);
        self.redraw = true;
    }

    /// Remove and return the active piece
    pub fn take_active(&mut self) -> Option<Piece> {
        self.redraw = true;
        self.active.take()
    }

    /// Take the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Check whether `piece` shifted by `delta` lands entirely on legal cells
    pub fn can_move(&self, piece: &Piece, delta: Point) -> bool {
        piece
            .occupied_cells()
            .all(|p| self.is_valid(p + delta))
    }

    /// Check whether `piece` lies entirely on legal cells
    pub fn fits(&self, piece: &Piece) -> bool {
        self.can_move(piece, Point::default())
    }

    /// Try to move the active piece by `delta`
    ///
    /// Horizontal movement drops the stale ghost; the ghost is recomputed
    /// whenever it is missing after the move.
    pub fn attempt_move(&mut self, delta: Point) -> bool {
        let Some(mut piece) = self.active.take() else {
            return false;
        };
        if !self.can_move(&piece, delta) {
            self.active = Some(piece);
            return false;
        }

        if delta.x != 0 {
            piece.ghost = None;
        }
        piece.anchor += delta;
        if piece.ghost.is_none() {
            piece.ghost = Some(Box::new(self.ghost_projection(&piece)));
        }
        self.active = Some(piece);
        self.redraw = true;
        true
    }

    /// Where `piece` would come to rest if dropped straight down
    pub fn ghost_projection(&self, piece: &Piece) -> Piece {
        let down = Direction::Down.movement();
        let mut ghost = piece.clone();
        while self.can_move(&ghost, down) {
            ghost.anchor += down;
        }
        ghost
    }

    /// Rotate the active piece 90° clockwise with wall-kick correction
    ///
    /// The rotated candidate is pushed back inside the left, right and bottom
    /// walls, then nudged one cell right (or else left) if it overlaps filled
    /// cells. The rotation is committed only if the final candidate is fully
    /// legal; otherwise the board is left unchanged and `false` is returned.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let mut candidate = active.clone();
        candidate.rotate();

        let width = self.width as i32;
        let height = self.height as i32;
        let right = Direction::Right.movement();
        let left = Direction::Left.movement();
        let up = Direction::Up.movement();

        // Each wall pass is bounded by the board size so an oversized mask
        // cannot spin forever.
        for _ in 0..self.width {
            if candidate.occupied_cells().all(|p| p.x >= 0) {
                break;
            }
            candidate.anchor += right;
        }
        for _ in 0..self.width {
            if candidate.occupied_cells().all(|p| p.x < width) {
                break;
            }
            candidate.anchor += left;
        }
        for _ in 0..self.height {
            if candidate.occupied_cells().all(|p| p.y < height) {
                break;
            }
            candidate.anchor += up;
        }

        if candidate.occupied_cells().any(|p| self.get(p.x, p.y) == Some(true)) {
            if self.can_move(&candidate, right) {
                candidate.anchor += right;
            } else if self.can_move(&candidate, left) {
                candidate.anchor += left;
            }
        }

        if !self.fits(&candidate) {
            return false;
        }

        self.set_active(candidate);
        true
    }

    /// Mark every cell of the active piece as filled
    ///
    /// The piece stays active; callers replace it with the next piece.
    pub fn fix(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let cells: Vec<usize> = active
            .occupied_cells()
            .filter_map(|p| self.index(p.x, p.y))
            .collect();
        for idx in cells {
            self.cells[idx] = true;
        }
        self.redraw = true;
    }

    /// Indices of all completely filled rows, in ascending order
    pub fn filled_line_indices(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and insert as many empty rows at the top
    ///
    /// Uses a two-pointer compaction from the bottom up. Out-of-range and
    /// duplicate indices are ignored; an empty list is a no-op.
    pub fn clear_lines(&mut self, lines: &[usize]) {
        let mut remove = vec![false; self.height];
        for &y in lines {
            if y < self.height {
                remove[y] = true;
            }
        }
        if !remove.iter().any(|&r| r) {
            return;
        }

        let width = self.width;
        let mut write_y = self.height;

        // Scan from bottom to top
        for read_y in (0..self.height).rev() {
            if remove[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                // copy_within handles overlapping ranges
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(false);
        self.redraw = true;
    }

    /// Anchor that centers `piece` horizontally on the top row
    pub fn spawn_position(&self, piece: &Piece) -> Point {
        let x = self.width.saturating_sub(piece.mask.width()) / 2;
        Point::new(x as i32, 0)
    }

    /// First row that holds a filled cell, or the board height if empty
    pub fn top_occupied_row(&self) -> usize {
        (0..self.height)
            .find(|&y| self.row(y).is_some_and(|row| row.iter().any(|&c| c)))
            .unwrap_or(self.height)
    }

    /// Clear the entire board, including the active piece
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.active = None;
        self.redraw = true;
    }

    /// Create from textual rows for testing (`'#'` or `'1'` = filled)
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Self::with_size(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                board.set(x as i32, y as i32, ch == '#' || ch == '1');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
