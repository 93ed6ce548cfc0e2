//! Terminal front-end.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders a [`core::GameSnapshot`] into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: snapshot → framebuffer (pure, testable)
//! - [`renderer`]: framebuffer → crossterm escape sequences

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
