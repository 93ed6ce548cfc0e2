//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond conversions, making them
//! usable in any context (core logic, runtime plumbing, terminal rendering).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (both are configurable per engine):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered on row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_DELAY_MS` | 800 | Fall interval at level 0 |
//! | `FALL_DELAY_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_DELAY_MS` | 1 | Fall interval floor |
//! | `KEY_REPEAT_START_DELAY_MS` | 100 | Delay before the first repeat of a held key |
//! | `KEY_REPEAT_PERIOD_MS` | 40 | Repeat cadence for left/right |
//! | `SOFT_DROP_REPEAT_PERIOD_MS` | 30 | Repeat cadence for soft drop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, Key, Point, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let p = Point::new(3, 4) + Direction::Down.movement();
//! assert_eq!(p, Point::new(3, 5));
//!
//! assert_eq!(Key::Down.action(), GameAction::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Fall interval at level 0
pub const BASE_FALL_DELAY_MS: u64 = 800;

/// Fall interval reduction per level
pub const FALL_DELAY_STEP_MS: u64 = 50;

/// The fall interval never drops below this
pub const MIN_FALL_DELAY_MS: u64 = 1;

/// Delay before the first repeat of a held key
pub const KEY_REPEAT_START_DELAY_MS: u32 = 100;

/// Repeat cadence of a held left/right key
pub const KEY_REPEAT_PERIOD_MS: u32 = 40;

/// Repeat cadence of a held soft-drop key
pub const SOFT_DROP_REPEAT_PERIOD_MS: u32 = 30;

/// `score / level` above this value triggers a level-up
pub const LEVEL_UP_THRESHOLD: u32 = 2000;

/// Points added by each level-up
pub const LEVEL_UP_BONUS: u32 = 100;

/// Line clear bonus by simultaneous line count (index = lines)
pub const LINE_SCORES: [u32; 5] = [0, 100, 250, 500, 1000];

/// ARGB color identifier
pub type ColorId = u32;

/// Default block palette (ARGB)
pub const DEFAULT_PALETTE: [ColorId; 11] = [
    0xFFA8_0000, // red
    0xFFCC_44CC, // purple
    0xFF00_CC55, // green
    0xFF28_44E0, // blue
    0xFFEE_EE77, // yellow
    0xFFDD_8855, // orange
    0xFF80_4C40, // brown
    0xFFFF_A890, // peach
    0xFF98_9498, // gray
    0xFFAA_FF66, // light green
    0xFF60_B0FF, // light blue
];

/// Integer 2D point, used both as a board coordinate and as a movement delta
///
/// `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Unit movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Delta applied to an anchor when moving one cell in this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Direction, Point};
    ///
    /// assert_eq!(Direction::Up.movement(), Point::new(0, -1));
    /// assert_eq!(Direction::Right.movement(), Point::new(1, 0));
    /// ```
    pub const fn movement(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

/// The seven piece shapes
///
/// - **I**: straight bar
/// - **L** / **LMirrored**: L and its mirror image
/// - **S** / **SMirrored**: S and its mirror image
/// - **O**: 2x2 square
/// - **T**: T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    L,
    LMirrored,
    S,
    SMirrored,
    O,
    T,
}

impl ShapeKind {
    /// All shapes, in declaration order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::LMirrored,
        ShapeKind::S,
        ShapeKind::SMirrored,
        ShapeKind::O,
        ShapeKind::T,
    ];

    /// Mask rows of the shape in spawn orientation (`'1'` = occupied)
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::I => &["0100", "0100", "0100", "0100"],
            ShapeKind::L => &["100", "100", "110"],
            ShapeKind::LMirrored => &["001", "001", "011"],
            ShapeKind::S => &["011", "110", "000"],
            ShapeKind::SMirrored => &["110", "011", "000"],
            ShapeKind::O => &["11", "11"],
            ShapeKind::T => &["010", "111", "000"],
        }
    }
}

/// Physical keys the engine reacts to
///
/// `Left`, `Right` and `Down` repeat while held; `Up` (rotate) is edge-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Up,
}

impl Key {
    /// Intent emitted when the key is pressed (and on each repeat)
    pub fn action(self) -> GameAction {
        match self {
            Key::Left => GameAction::MoveLeft,
            Key::Right => GameAction::MoveRight,
            Key::Down => GameAction::SoftDrop,
            Key::Up => GameAction::Rotate,
        }
    }
}

/// Game intents that can be applied to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Award the speed-up bonus and step the piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise with wall-kick correction
    Rotate,
    /// Toggle pause state
    Pause,
}

/// Lifecycle of a game session
///
/// `NotStarted → Running ⇄ Paused`, `Running → GameOver`; stopping resets to
/// `NotStarted` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl SessionState {
    /// Whether a session is in progress (running or paused)
    pub fn in_progress(&self) -> bool {
        matches!(self, SessionState::Running | SessionState::Paused)
    }
}
