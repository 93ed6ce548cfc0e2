//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Key`] presses and releases and provides a
//! held-key repeat handler suitable for terminal environments (including
//! terminals without key-release events).

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_key_code, should_quit, KeyInput};
