use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimension {0}: must be between 5 and 20")]
    InvalidDimension(usize),

    #[error("position ({row}, {column}) is outside a {dim}x{dim} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        dim: usize,
    },

    #[error("attempt grid has {found} cells along one side, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("unknown cell code {0}")]
    InvalidCellCode(u8),

    #[error("solvability repair gave up after {0} rounds")]
    RepairExhausted(usize),

    #[error("cellular automaton did not settle within {0} generations")]
    Unsettled(usize),
}
