//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so that binaries, tests and
//! benches can write `blockfall::{core, engine, input, runtime, term, types}`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_runtime as runtime;
pub use blockfall_term as term;
pub use blockfall_types as types;
