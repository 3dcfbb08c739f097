//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, batch driver, CLI).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9), fixed for the life of a simulation
//! - **Height**: unbounded; rows are appended as pieces land and removed as they clear
//! - **Row 0** is the bottom of the stack
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Command, ShapeKind, GRID_WIDTH};
//!
//! // Parse a shape identifier (case-sensitive)
//! assert_eq!(ShapeKind::from_char('T'), Some(ShapeKind::T));
//! assert_eq!(ShapeKind::from_char('t'), None);
//!
//! // Commands carry the raw identifier; the catalog resolves it later
//! let cmd = Command::new('Q', 4);
//! assert_eq!(cmd.to_string(), "Q4");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! ```

use std::fmt;

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// The seven shape kinds known to the catalog
///
/// Offsets for each kind live in the core crate's piece catalog; this enum
/// only names them.
/// - **Q**: 2x2 square
/// - **Z**: Z-shaped, upper row shifted left
/// - **S**: S-shaped, upper row shifted right
/// - **T**: T-shaped, stem pointing down
/// - **I**: horizontal bar, four wide
/// - **L**: L-shaped, foot pointing right
/// - **J**: J-shaped, foot pointing left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Q,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse a shape kind from its identifier character
    ///
    /// Identifiers are upper-case only; anything else is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('I'), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_char('X'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(ShapeKind::Q),
            'Z' => Some(ShapeKind::Z),
            'S' => Some(ShapeKind::S),
            'T' => Some(ShapeKind::T),
            'I' => Some(ShapeKind::I),
            'L' => Some(ShapeKind::L),
            'J' => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Identifier character for this kind
    pub fn as_char(&self) -> char {
        match self {
            ShapeKind::Q => 'Q',
            ShapeKind::Z => 'Z',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::I => 'I',
            ShapeKind::L => 'L',
            ShapeKind::J => 'J',
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single placement: drop `shape` with its column-offset-0 cells aligned to `start_column`
///
/// The shape is kept as the raw identifier so that unknown identifiers surface
/// from the catalog lookup rather than from parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    pub shape: char,
    pub start_column: usize,
}

impl Command {
    pub fn new(shape: char, start_column: usize) -> Self {
        Self {
            shape,
            start_column,
        }
    }
}

impl From<(ShapeKind, usize)> for Command {
    fn from((kind, start_column): (ShapeKind, usize)) -> Self {
        Self::new(kind.as_char(), start_column)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.shape, self.start_column)
    }
}
