//! Simulation driver and batch runner
//!
//! This crate replays command sequences against the core grid:
//!
//! - [`simulation`]: one sequence, one grid; place then clear per command
//! - [`parse`]: turns `Q0,T1,I6` style lines into commands
//! - [`batch`]: many lines at once, in parallel, results in input order
//!
//! # Example
//!
//! ```
//! use tetris_stack_engine::{parse_line, run_sequence};
//!
//! let commands = parse_line("Q0,Q2,Q4,Q6,Q8").unwrap();
//! assert_eq!(run_sequence(&commands), Ok(0));
//! ```

pub mod batch;
pub mod parse;
pub mod simulation;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use batch::{run_batch, BatchError, BatchOptions, LineError, LineHeight};
pub use parse::{parse_command, parse_line, ParseError};
pub use simulation::{run_sequence, Simulation};
