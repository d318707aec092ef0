use crate::error::MazeError;
use crate::grids::CellKind;
use crate::steps::Snapshot;

pub const MIN_DIMENSIONS: usize = 5;
pub const MAX_DIMENSIONS: usize = 20;

/// Square cell matrix backing one maze.
///
/// The side length is fixed at construction and every access is checked
/// against it; generators mutate cells in place but never resize the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    dim: usize,
    cells: Vec<CellKind>,
}

impl BlockGrid {
    /// Creates an all-`Empty` grid. Side lengths outside
    /// [`MIN_DIMENSIONS`]..=[`MAX_DIMENSIONS`] are rejected.
    pub fn with_dim(dim: usize) -> Result<Self, MazeError> {
        if !(MIN_DIMENSIONS..=MAX_DIMENSIONS).contains(&dim) {
            return Err(MazeError::InvalidDimension(dim));
        }
        Ok(Self {
            dim,
            cells: vec![CellKind::Empty; dim * dim],
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, MazeError> {
        if row >= self.dim || column >= self.dim {
            return Err(MazeError::OutOfBounds {
                row,
                column,
                dim: self.dim,
            });
        }
        Ok(self.dim * row + column)
    }

    pub fn kind(&self, row: usize, column: usize) -> Result<CellKind, MazeError> {
        Ok(self.cells[self.index(row, column)?])
    }

    /// Writes a cell and returns the kind it held before.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        kind: CellKind,
    ) -> Result<CellKind, MazeError> {
        let index = self.index(row, column)?;
        let prev_kind = self.cells[index];
        self.cells[index] = kind;
        Ok(prev_kind)
    }

    pub fn fill(&mut self, kind: CellKind) {
        for cell in &mut self.cells {
            *cell = kind;
        }
    }

    /// Rewrites every cell of one kind to another.
    pub fn relabel(&mut self, from: CellKind, to: CellKind) {
        for cell in &mut self.cells {
            if *cell == from {
                *cell = to;
            }
        }
    }

    /// Coordinates of every cell currently holding `kind`, row-major order.
    pub fn positions_of(&self, kind: CellKind) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == kind)
            .map(|(index, _)| (index / self.dim, index % self.dim))
            .collect()
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Independent deep copy of the current matrix; later mutation of the
    /// grid leaves the snapshot untouched.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.dim)
            .map(|row| row.iter().map(|&kind| u8::from(kind)).collect())
            .collect()
    }

    /// Builds a grid from a square matrix of cell codes, rejecting ragged
    /// rows and unknown codes.
    pub fn from_codes(codes: &[Vec<u8>]) -> Result<Self, MazeError> {
        let dim = codes.len();
        let mut grid = Self::with_dim(dim)?;
        for (row, line) in codes.iter().enumerate() {
            if line.len() != dim {
                return Err(MazeError::DimensionMismatch {
                    expected: dim,
                    found: line.len(),
                });
            }
            for (column, &code) in line.iter().enumerate() {
                grid.set_cell(row, column, CellKind::try_from(code)?)?;
            }
        }
        Ok(grid)
    }
}
