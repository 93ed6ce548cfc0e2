//! Piece module - a shaped, colored block group positioned on the board

use crate::geometry::ShapeMask;
use crate::types::{ColorId, Point, ShapeKind};

/// A falling piece: a mask anchored at a board position
///
/// The anchor is the board position of the mask's top-left cell. The ghost is
/// the piece's drop projection and is owned exclusively by the piece.
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub mask: ShapeMask,
    pub anchor: Point,
    pub color: ColorId,
    pub ghost: Option<Box<Piece>>,
}

impl Piece {
    /// Create a piece in spawn orientation anchored at `(0, 0)`
    pub fn new(kind: ShapeKind, color: ColorId) -> Self {
        Self {
            kind,
            mask: ShapeMask::from_rows(kind.rows()),
            anchor: Point::default(),
            color,
            ghost: None,
        }
    }

    /// Absolute board positions of every occupied cell
    ///
    /// The iterator is lazy and finite; calling this again restarts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Piece;
    /// use blockfall_types::{Point, ShapeKind};
    ///
    /// let mut o = Piece::new(ShapeKind::O, 0);
    /// o.anchor = Point::new(4, 10);
    /// let cells: Vec<Point> = o.occupied_cells().collect();
    /// assert_eq!(cells[0], Point::new(4, 10));
    /// assert_eq!(cells[3], Point::new(5, 11));
    /// ```
    pub fn occupied_cells(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        let anchor = self.anchor;
        self.mask.filled().map(move |offset| anchor + offset)
    }

    /// Rotate the mask 90° clockwise around the anchor
    pub fn rotate(&mut self) {
        self.mask.rotate();
    }

    pub fn ghost(&self) -> Option<&Piece> {
        self.ghost.as_deref()
    }
}

/// Copies mask, anchor, kind and color; the ghost is not carried over since it
/// only makes sense for the board context it was projected in.
impl Clone for Piece {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            mask: self.mask.clone(),
            anchor: self.anchor,
            color: self.color,
            ghost: None,
        }
    }
}
