//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the stacking engine: which cells each shape
//! occupies, where a dropped shape comes to rest, and how completed rows are
//! removed. It has no I/O and no global mutable state; every [`Grid`] is owned
//! by the caller that created it.
//!
//! # Module Structure
//!
//! - [`pieces`]: the fixed catalog of seven shapes and identifier lookup
//! - [`grid`]: the growing row stack, gravity placement, and line clearing
//! - [`error`]: the typed failures a placement can raise
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{lookup, Grid};
//!
//! let mut grid = Grid::new();
//! grid.place(lookup('I').unwrap(), 0).unwrap();
//! grid.place(lookup('I').unwrap(), 4).unwrap();
//! grid.place(lookup('Q').unwrap(), 8).unwrap();
//!
//! assert_eq!(grid.clear_completed(), 1);
//! assert_eq!(grid.height(), 1);
//! ```

pub mod error;
pub mod grid;
pub mod pieces;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{EngineError, Result};
pub use grid::{Grid, Row};
pub use pieces::{lookup, shape, CellOffset, Shape};
