//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state with **zero dependencies**
//! on rendering, input devices, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any presentation layer (terminal, canvas, mobile) can drive it
//!
//! # Module Structure
//!
//! - [`geometry`]: Rotatable bit masks describing piece shapes
//! - [`piece`]: Pieces with anchor, color and ghost projection
//! - [`board`]: Grid with collision detection, wall kicks and line clearing
//! - [`score`]: Score and level state machine
//! - [`rng`]: Seedable weighted piece generation
//! - [`snapshot`]: Read-only view for presentation layers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, Piece};
//! use blockfall_types::{Direction, ShapeKind};
//!
//! let mut board = Board::new();
//! let mut piece = Piece::new(ShapeKind::I, 0);
//! piece.anchor = board.spawn_position(&piece);
//! board.set_active(piece);
//!
//! while board.attempt_move(Direction::Down.movement()) {}
//! board.fix();
//! assert_eq!(board.top_occupied_row(), 16);
//! ```

pub mod board;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod score;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use geometry::ShapeMask;
pub use piece::Piece;
pub use rng::{PieceFactory, SimpleRng, SHAPE_TABLE};
pub use score::{line_clear_bonus, Score, ScoreState, ScoreUpdate};
pub use snapshot::{GameSnapshot, PieceSnapshot};
