use log::{debug, warn};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::MazeError;
use crate::generators::Generator;
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::solver;
use crate::steps::StepRecorder;

/// Upper bound on automaton iterations before giving up; the history match
/// must fire eventually but has no useful bound on its own.
const MAX_GENERATIONS: usize = 4096;

/// Upper bound on repair rounds; random carving has no proven termination.
const MAX_REPAIR_ROUNDS: usize = 1024;

/// Cellular automata generator.
///
/// Walls are the live cells. Each generation a cell is live when its 3x3
/// block holds exactly 3 walls, or when it is already a wall and the block
/// holds 1 to 5. The count is clipped at the grid edges and includes the
/// center cell itself; the caves this rule grows are what the maze is, so
/// the count is kept as is rather than corrected to the exclude-self
/// convention. The automaton runs until it reproduces a state already in
/// the step history, which covers both stable grids and oscillators, then a
/// repair pass carves corridors until the corners are connected.
pub struct Automata {
    rng: StdRng,
}

impl Automata {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn scatter(&mut self, grid: &mut BlockGrid) -> Result<(), MazeError> {
        for row in 0..grid.dim() {
            for column in 0..grid.dim() {
                let kind = if self.rng.gen_bool(0.5) {
                    CellKind::Wall
                } else {
                    CellKind::Empty
                };
                grid.set_cell(row, column, kind)?;
            }
        }
        Ok(())
    }

    /// Wall count over the 3x3 block around (and including) the cell,
    /// clipped at the edges.
    fn live_count(grid: &BlockGrid, row: usize, column: usize) -> Result<u8, MazeError> {
        let dim = grid.dim();
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(dim - 1) {
            for c in column.saturating_sub(1)..=(column + 1).min(dim - 1) {
                if grid.kind(r, c)? == CellKind::Wall {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Runs the automaton until it reproduces a recorded state, failing
    /// with [`MazeError::Unsettled`] once `max_generations` is spent.
    fn settle(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
        max_generations: usize,
    ) -> Result<(), MazeError> {
        for generation in 0..max_generations {
            self.evolve(grid)?;
            let seen = steps.contains(grid);
            steps.record(grid);
            if seen {
                debug!("automaton settled after {} generations", generation + 1);
                return Ok(());
            }
        }
        Err(MazeError::Unsettled(max_generations))
    }

    fn evolve(&self, grid: &mut BlockGrid) -> Result<(), MazeError> {
        let prev = grid.clone();
        for row in 0..grid.dim() {
            for column in 0..grid.dim() {
                let count = Self::live_count(&prev, row, column)?;
                let alive = prev.kind(row, column)? == CellKind::Wall;
                let next = if count == 3 || (alive && (1..=5).contains(&count)) {
                    CellKind::Wall
                } else {
                    CellKind::Empty
                };
                grid.set_cell(row, column, next)?;
            }
        }
        Ok(())
    }

    /// Carves random corridors until the two targets are connected.
    ///
    /// Every empty cell is marked `Selected` so the reachability check
    /// applies, then each round walks a random target toward a random
    /// selected cell, advancing along whichever axis has more ground left
    /// (rows win ties) and opening each traversed cell, until the two share
    /// an axis. On success everything selected is relabeled back to empty.
    fn repair(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
    ) -> Result<(), MazeError> {
        grid.relabel(CellKind::Empty, CellKind::Selected);
        let selected = grid.positions_of(CellKind::Selected);
        let targets = grid.positions_of(CellKind::Target);

        let mut rounds = 0;
        while !solver::verify(grid) {
            if rounds >= MAX_REPAIR_ROUNDS || selected.is_empty() {
                return Err(MazeError::RepairExhausted(rounds));
            }
            rounds += 1;

            let goal = selected[self.rng.gen_range(0..selected.len())];
            let mut pos = targets[self.rng.gen_range(0..targets.len())];
            warn!("repair round {}: carving from {:?} toward {:?}", rounds, pos, goal);

            while pos.0 != goal.0 && pos.1 != goal.1 {
                if goal.0.abs_diff(pos.0) >= goal.1.abs_diff(pos.1) {
                    pos.0 = if goal.0 > pos.0 { pos.0 + 1 } else { pos.0 - 1 };
                } else {
                    pos.1 = if goal.1 > pos.1 { pos.1 + 1 } else { pos.1 - 1 };
                }
                if grid.kind(pos.0, pos.1)? != CellKind::Target {
                    grid.set_cell(pos.0, pos.1, CellKind::Selected)?;
                }
            }
            steps.record(grid);
        }

        grid.relabel(CellKind::Selected, CellKind::Empty);
        Ok(())
    }
}

impl Generator for Automata {
    fn generate(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
    ) -> Result<(), MazeError> {
        self.scatter(grid)?;
        steps.record(grid);
        self.settle(grid, steps, MAX_GENERATIONS)?;

        let dim = grid.dim();
        grid.set_cell(0, 0, CellKind::Target)?;
        grid.set_cell(dim - 1, dim - 1, CellKind::Target)?;
        steps.record(grid);

        self.repair(grid, steps)?;
        steps.record(grid);
        Ok(())
    }
}
