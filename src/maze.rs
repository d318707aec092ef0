use log::info;
use rand::prelude::*;

use crate::error::MazeError;
use crate::generators::GeneratorKind;
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::solver;
use crate::steps::StepRecorder;

/// One maze: the live grid plus the snapshot history of its generation.
///
/// A `Maze` is created per generation request, generated exactly once and
/// then read; nothing here is shared across requests.
#[derive(Debug)]
pub struct Maze {
    grid: BlockGrid,
    steps: StepRecorder,
}

impl Maze {
    /// New all-empty maze. `dimensions` must be 5 to 20 inclusive.
    pub fn new(dimensions: usize) -> Result<Self, MazeError> {
        Ok(Self {
            grid: BlockGrid::with_dim(dimensions)?,
            steps: StepRecorder::new(),
        })
    }

    pub fn dimensions(&self) -> usize {
        self.grid.dim()
    }

    /// Runs one generation algorithm to completion with a fresh seed.
    pub fn generate(&mut self, kind: GeneratorKind) -> Result<(), MazeError> {
        self.generate_seeded(kind, rand::thread_rng().gen())
    }

    /// Seeded generation; the same seed reproduces the same maze and the
    /// same step history. Any state from an earlier run is discarded first.
    pub fn generate_seeded(&mut self, kind: GeneratorKind, seed: u64) -> Result<(), MazeError> {
        self.grid.fill(CellKind::Empty);
        self.steps.clear();

        kind.build(seed).generate(&mut self.grid, &mut self.steps)?;
        info!(
            "generated {}x{} maze with {:?}, {} steps recorded",
            self.grid.dim(),
            self.grid.dim(),
            kind,
            self.steps.len()
        );
        Ok(())
    }

    /// Final cell codes; a finished maze holds only 0 (empty), 1 (wall) and
    /// 4 (target).
    pub fn values(&self) -> Vec<Vec<u8>> {
        self.grid.to_codes()
    }

    /// The recorded generation history as code matrices, oldest first.
    pub fn steps(&self) -> Vec<Vec<Vec<u8>>> {
        self.steps
            .snapshots()
            .iter()
            .map(|snapshot| snapshot.to_codes())
            .collect()
    }

    pub fn step_recorder(&self) -> &StepRecorder {
        &self.steps
    }

    /// Checks a caller-marked attempt: the matrix must be this maze's
    /// dimension and hold known cell codes; a path is a chain of 3
    /// (selected) and 4 (target) codes from (0, 0) to the far corner. The
    /// attempt is not modified.
    pub fn check_solution(&self, attempt: &[Vec<u8>]) -> Result<bool, MazeError> {
        if attempt.len() != self.grid.dim() {
            return Err(MazeError::DimensionMismatch {
                expected: self.grid.dim(),
                found: attempt.len(),
            });
        }
        let attempt = BlockGrid::from_codes(attempt)?;
        Ok(solver::verify(&attempt))
    }
}

#[cfg(test)]
mod test_maze {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(Maze::new(4).unwrap_err(), MazeError::InvalidDimension(4));
        assert_eq!(Maze::new(21).unwrap_err(), MazeError::InvalidDimension(21));
        assert_eq!(Maze::new(9).unwrap().dimensions(), 9);
    }

    #[test]
    fn check_solution_validates_the_attempt() {
        let mut maze = Maze::new(5).unwrap();
        maze.generate_seeded(GeneratorKind::Dfs, 1).unwrap();

        assert_eq!(
            maze.check_solution(&vec![vec![0u8; 6]; 6]),
            Err(MazeError::DimensionMismatch {
                expected: 5,
                found: 6
            })
        );

        let mut ragged = vec![vec![0u8; 5]; 5];
        ragged[2] = vec![0u8; 7];
        assert_eq!(
            maze.check_solution(&ragged),
            Err(MazeError::DimensionMismatch {
                expected: 5,
                found: 7
            })
        );

        let mut bad_code = vec![vec![0u8; 5]; 5];
        bad_code[0][0] = 7;
        assert_eq!(
            maze.check_solution(&bad_code),
            Err(MazeError::InvalidCellCode(7))
        );
    }

    #[test]
    fn regenerating_discards_the_previous_run() {
        let mut maze = Maze::new(7).unwrap();
        maze.generate_seeded(GeneratorKind::Dfs, 1).unwrap();
        maze.generate_seeded(GeneratorKind::RecursiveDivision, 2).unwrap();

        let mut fresh = Maze::new(7).unwrap();
        fresh
            .generate_seeded(GeneratorKind::RecursiveDivision, 2)
            .unwrap();

        assert_eq!(maze.values(), fresh.values());
        assert_eq!(maze.steps(), fresh.steps());
    }
}
