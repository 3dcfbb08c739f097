//! Pieces module - the fixed shape catalog
//!
//! Each shape is a list of (row, column) offsets in its single canonical
//! orientation. Row offset 0 is the lowest row the shape touches; column
//! offset 0 aligns with the command's start column. There is no rotation.

use crate::error::{EngineError, Result};
use crate::types::ShapeKind;

/// Offset of a single cell relative to the shape origin: (row, column)
pub type CellOffset = (usize, usize);

/// A catalog entry - the four cell offsets of one shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    cells: [CellOffset; 4],
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    /// Number of columns spanned (1 + max column offset)
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, dc)| dc + 1).max().unwrap_or(0)
    }

    /// Number of rows spanned (1 + max row offset)
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(dr, _)| dr + 1).max().unwrap_or(0)
    }
}

static Q: Shape = Shape {
    kind: ShapeKind::Q,
    cells: [(0, 0), (0, 1), (1, 0), (1, 1)],
};

static Z: Shape = Shape {
    kind: ShapeKind::Z,
    cells: [(1, 0), (1, 1), (0, 1), (0, 2)],
};

static S: Shape = Shape {
    kind: ShapeKind::S,
    cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
};

static T: Shape = Shape {
    kind: ShapeKind::T,
    cells: [(1, 0), (1, 1), (0, 1), (1, 2)],
};

static I: Shape = Shape {
    kind: ShapeKind::I,
    cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
};

static L: Shape = Shape {
    kind: ShapeKind::L,
    cells: [(0, 0), (1, 0), (0, 1), (2, 0)],
};

static J: Shape = Shape {
    kind: ShapeKind::J,
    cells: [(0, 0), (0, 1), (1, 1), (2, 1)],
};

/// Get the catalog entry for a shape kind
pub fn shape(kind: ShapeKind) -> &'static Shape {
    match kind {
        ShapeKind::Q => &Q,
        ShapeKind::Z => &Z,
        ShapeKind::S => &S,
        ShapeKind::T => &T,
        ShapeKind::I => &I,
        ShapeKind::L => &L,
        ShapeKind::J => &J,
    }
}

/// Resolve a raw shape identifier against the catalog
pub fn lookup(id: char) -> Result<&'static Shape> {
    ShapeKind::from_char(id)
        .map(shape)
        .ok_or(EngineError::UnknownShape(id))
}
