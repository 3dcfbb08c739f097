//! Grid module - the growing stack of rows
//!
//! The grid is a fixed-width, unbounded-height stack. Row 0 is the bottom.
//! Rows are appended when a shape lands above the current top and removed
//! when they become completely filled.
//!
//! Alongside the rows the grid caches one height per column: the index one
//! past the highest occupied cell in that column, or 0 for an empty column.
//! Placement reads these heights to find the landing row without scanning
//! the rows themselves.

use std::fmt;

use log::trace;

use crate::error::{EngineError, Result};
use crate::pieces::Shape;
use crate::types::GRID_WIDTH;

/// One row of cells, left to right
pub type Row = [bool; GRID_WIDTH];

const EMPTY_ROW: Row = [false; GRID_WIDTH];

/// The stack of settled cells plus the per-column height cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Rows bottom to top
    rows: Vec<Row>,
    /// One past the highest occupied row, per column
    column_heights: [usize; GRID_WIDTH],
}

impl Grid {
    /// Create a grid holding a single empty row
    pub fn new() -> Self {
        Self {
            rows: vec![EMPTY_ROW],
            column_heights: [0; GRID_WIDTH],
        }
    }

    /// Create a grid with no rows at all
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            column_heights: [0; GRID_WIDTH],
        }
    }

    /// Number of rows currently in the grid
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn column_heights(&self) -> &[usize; GRID_WIDTH] {
        &self.column_heights
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index, `None` above the top
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Check if a cell is occupied; anything outside the grid is empty
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(is_full)
    }

    /// Row at which `shape` comes to rest when dropped at `start_column`
    ///
    /// Each cell (dr, dc) requires the shape origin to sit at or above
    /// `column_heights[start_column + dc] - dr`; the landing row is the highest
    /// of those requirements, never below 0.
    pub fn landing_row(&self, shape: &Shape, start_column: usize) -> Result<usize> {
        self.check_bounds(shape, start_column)?;

        Ok(shape
            .cells()
            .iter()
            .map(|&(dr, dc)| self.column_heights[start_column + dc].saturating_sub(dr))
            .max()
            .unwrap_or(0))
    }

    /// Drop `shape` at `start_column` and stamp its cells into the grid
    ///
    /// Bounds are checked before anything is written, so a rejected placement
    /// leaves the grid untouched. Returns the landing row.
    pub fn place(&mut self, shape: &Shape, start_column: usize) -> Result<usize> {
        let y = self.landing_row(shape, start_column)?;

        for &(dr, dc) in shape.cells() {
            let row = y + dr;
            let col = start_column + dc;

            if row >= self.rows.len() {
                self.rows.resize(row + 1, EMPTY_ROW);
            }

            self.rows[row][col] = true;
            self.column_heights[col] = self.column_heights[col].max(row + 1);
        }

        trace!(
            "placed {} at column {start_column}, landing row {y}, height now {}",
            shape.kind(),
            self.rows.len()
        );
        Ok(y)
    }

    /// Remove every completely filled row and return how many were removed
    ///
    /// Surviving rows keep their relative order, so several non-adjacent rows
    /// can be cleared in one pass. Column heights are rebuilt from the
    /// compacted rows. When nothing is full the grid is left as it was.
    pub fn clear_completed(&mut self) -> usize {
        let full = self.rows.iter().filter(|row| is_full(row)).count();
        if full == 0 {
            return 0;
        }

        self.rows.retain(|row| !is_full(row));
        self.recompute_column_heights();

        trace!("cleared {full} row(s), height now {}", self.rows.len());
        full
    }

    /// Rebuild the column height cache by scanning every row
    pub fn recompute_column_heights(&mut self) {
        self.column_heights = scan_column_heights(&self.rows);
    }

    /// Whether the cached column heights agree with a fresh scan of the rows
    pub fn column_heights_consistent(&self) -> bool {
        self.column_heights == scan_column_heights(&self.rows)
    }

    fn check_bounds(&self, shape: &Shape, start_column: usize) -> Result<()> {
        match start_column.checked_add(shape.width()) {
            Some(end) if end <= GRID_WIDTH => Ok(()),
            _ => Err(EngineError::OutOfBounds {
                kind: shape.kind(),
                start_column,
            }),
        }
    }

    /// Create from explicit rows (bottom first), deriving column heights
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let column_heights = scan_column_heights(&rows);
        Self {
            rows,
            column_heights,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders top row first, `#` for occupied and `.` for empty
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter().rev() {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn is_full(row: &Row) -> bool {
    row.iter().all(|&cell| cell)
}

fn scan_column_heights(rows: &[Row]) -> [usize; GRID_WIDTH] {
    let mut heights = [0; GRID_WIDTH];
    for (y, row) in rows.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell {
                heights[x] = y + 1;
            }
        }
    }
    heights
}
