//! Tetris stack engine (workspace facade crate).
//!
//! The simulation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_stack::{core,engine,types}` and adds the file
//! I/O and command-line configuration used by the `tetris-stack` binary.

pub mod cli;
pub mod io;

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_types as types;
