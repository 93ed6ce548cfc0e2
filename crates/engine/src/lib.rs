//! Game engine - session lifecycle, fall steps and notifications
//!
//! Builds on `blockfall-core` and adds the parts that make a playable session:
//! starting and stopping, pause, spawning from the preview, game-over
//! detection, level-dependent fall delay and a queue of [`Notification`]s for
//! the presentation layer.
//!
//! The engine is still clock-free. A host (see `blockfall-runtime`) decides
//! when to call [`Game::step_down`].

pub mod config;
pub mod error;
pub mod game;
pub mod notify;

pub use config::{EngineConfig, MIN_BOARD_SIDE};
pub use error::EngineError;
pub use game::{Game, StepOutcome};
pub use notify::Notification;
