//! Game runtime - timers, key repeat and command plumbing around the engine
//!
//! The engine in `blockfall-engine` is clock-free. This crate gives it a
//! clock: a single tokio task (the actor) owns the [`blockfall_engine::Game`]
//! and an [`blockfall_input::InputHandler`] and reacts to three things:
//!
//! - **Commands** from the host on a bounded channel (start, stop, pause,
//!   key presses and releases, snapshots)
//! - **Fall deadline**: one step down every `fall_delay` while running
//! - **Key-repeat deadline**: the next repeat of a held key
//!
//! Notifications produced by the engine are forwarded on an unbounded
//! channel in emission order.
//!
//! Two front doors are provided:
//!
//! - [`RuntimeHandle`] for async hosts already inside a tokio runtime
//! - [`Driver`] for synchronous hosts; it owns its own runtime
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_SEED`: Piece generator seed (default: 1)
//! - `BLOCKFALL_WIDTH` / `BLOCKFALL_HEIGHT`: Board size (default: 10x20)
//! - `BLOCKFALL_QUEUE`: Command channel capacity (default: 64)
//! - `BLOCKFALL_LOG`: Set to "1" or "true" to log lifecycle events to stderr

pub mod actor;
pub mod config;
pub mod driver;
pub mod error;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use actor::{spawn, Command, RuntimeHandle};
pub use config::RuntimeConfig;
pub use driver::Driver;
pub use error::RuntimeError;
