pub mod block_grid;

use crate::error::MazeError;

/// State of a single grid position.
///
/// The discriminants are the integer codes used at the API boundary:
/// callers receive finished mazes and submit attempts as matrices of these
/// codes. `Unvisited` only exists while the growing-tree generator runs and
/// `Selected` marks candidate path cells; neither survives into a finished
/// maze.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Empty = 0,
    Wall = 1,
    Unvisited = 2,
    Selected = 3,
    Target = 4,
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for CellKind {
    type Error = MazeError;

    fn try_from(code: u8) -> Result<Self, MazeError> {
        match code {
            0 => Ok(CellKind::Empty),
            1 => Ok(CellKind::Wall),
            2 => Ok(CellKind::Unvisited),
            3 => Ok(CellKind::Selected),
            4 => Ok(CellKind::Target),
            other => Err(MazeError::InvalidCellCode(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One orthogonal step from `pos`, `None` when the step would leave a
    /// `dim`-sided grid.
    pub fn step(self, pos: (usize, usize), dim: usize) -> Option<(usize, usize)> {
        let (row, column) = pos;
        match self {
            Direction::North => (row > 0).then(|| (row - 1, column)),
            Direction::South => (row + 1 < dim).then(|| (row + 1, column)),
            Direction::East => (column + 1 < dim).then(|| (row, column + 1)),
            Direction::West => (column > 0).then(|| (row, column - 1)),
        }
    }
}
