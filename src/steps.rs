use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;

/// Full copy of a grid's matrix at one instant of generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    dim: usize,
    cells: Vec<CellKind>,
}

impl Snapshot {
    pub(crate) fn of(grid: &BlockGrid) -> Self {
        Self {
            dim: grid.dim(),
            cells: grid.cells().to_vec(),
        }
    }

    /// Whether the live grid currently holds exactly this state.
    pub fn matches(&self, grid: &BlockGrid) -> bool {
        self.dim == grid.dim() && self.cells == grid.cells()
    }

    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.dim)
            .map(|row| row.iter().map(|&kind| u8::from(kind)).collect())
            .collect()
    }
}

/// Append-only history of grid snapshots, in the order the generator
/// recorded them. It exists for stepwise playback and, for the cellular
/// automaton, to detect a previously seen state; it never influences the
/// final grid.
#[derive(Debug, Default)]
pub struct StepRecorder {
    snapshots: Vec<Snapshot>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, grid: &BlockGrid) {
        self.snapshots.push(grid.snapshot());
    }

    /// Whether any recorded snapshot equals the grid's current state.
    pub fn contains(&self, grid: &BlockGrid) -> bool {
        self.snapshots.iter().any(|snapshot| snapshot.matches(grid))
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}
