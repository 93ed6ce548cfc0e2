use crate::board::Board;
use crate::piece::Piece;
use crate::score::ScoreState;
use crate::types::{ColorId, Point, SessionState, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub color: ColorId,
    pub anchor: Point,
    pub cells: Vec<Point>,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            anchor: value.anchor,
            cells: value.occupied_cells().collect(),
        }
    }
}

/// Read-only copy of everything a presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major fixed cells
    pub cells: Vec<bool>,
    pub active: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    /// Next piece with cells relative to the preview origin
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub state: SessionState,
}

impl GameSnapshot {
    pub fn capture(
        board: &Board,
        next: Option<&Piece>,
        score: ScoreState,
        state: SessionState,
    ) -> Self {
        let active = board.active();
        Self {
            width: board.width(),
            height: board.height(),
            cells: board.cells().to_vec(),
            active: active.map(PieceSnapshot::from),
            ghost: active.and_then(Piece::ghost).map(PieceSnapshot::from),
            next: next.map(|p| {
                let mut preview = PieceSnapshot::from(p);
                preview.anchor = Point::default();
                preview.cells = p.mask.filled().collect();
                preview
            }),
            score: score.score,
            level: score.level,
            state,
        }
    }

    /// Fixed cell at (x, y); out of bounds reads as empty
    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}
