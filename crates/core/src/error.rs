//! Errors raised while resolving and placing shapes

use thiserror::Error;

use crate::types::{ShapeKind, GRID_WIDTH};

/// Failure of a single placement
///
/// Both variants are fatal to the sequence being replayed; the engine never
/// clamps a placement or substitutes a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown shape identifier {0:?}")]
    UnknownShape(char),

    #[error("shape {kind} at column {start_column} extends past column {}", GRID_WIDTH - 1)]
    OutOfBounds { kind: ShapeKind, start_column: usize },
}

impl EngineError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            EngineError::UnknownShape(_) => "unknown_shape",
            EngineError::OutOfBounds { .. } => "out_of_bounds",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(EngineError::UnknownShape('X').code(), "unknown_shape");
        let oob = EngineError::OutOfBounds {
            kind: ShapeKind::I,
            start_column: 8,
        };
        assert_eq!(oob.code(), "out_of_bounds");
    }

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            EngineError::UnknownShape('X').to_string(),
            "unknown shape identifier 'X'"
        );
        let oob = EngineError::OutOfBounds {
            kind: ShapeKind::I,
            start_column: 8,
        };
        assert_eq!(oob.to_string(), "shape I at column 8 extends past column 9");
    }
}
