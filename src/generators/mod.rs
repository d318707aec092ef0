pub mod automata;
pub mod backtracker;
pub mod division;

use crate::error::MazeError;
use crate::grids::block_grid::BlockGrid;
use crate::steps::StepRecorder;

pub trait Generator {
    /// Runs the algorithm to completion, mutating `grid` in place and
    /// appending a snapshot to `steps` at each recorded instant. On success
    /// the grid holds only `Empty`, `Wall` and the two corner `Target`
    /// cells.
    fn generate(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
    ) -> Result<(), MazeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Dfs,
    RecursiveDivision,
    CellularAutomata,
}

impl GeneratorKind {
    /// Builds the generator with its own random source. The same seed
    /// reproduces the same maze and step history.
    pub fn build(self, seed: u64) -> Box<dyn Generator> {
        match self {
            GeneratorKind::Dfs => Box::new(backtracker::Backtracker::from_seed(seed)),
            GeneratorKind::RecursiveDivision => {
                Box::new(division::RecursiveDivider::from_seed(seed))
            }
            GeneratorKind::CellularAutomata => Box::new(automata::Automata::from_seed(seed)),
        }
    }
}
