use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::MazeError;
use crate::generators::Generator;
use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Direction};
use crate::steps::StepRecorder;

/// Randomized growing-tree generator.
///
/// Cells live on the even/even lattice with walls between them. From a
/// random lattice point the generator walks in a random direction until it
/// reaches an unvisited cell, carves the corridor it crossed, and continues
/// from there; when all four directions of a position are spent it
/// backtracks. The result is a perfect maze: every pair of empty cells is
/// connected by exactly one path.
pub struct Backtracker {
    rng: StdRng,
}

/// One backtracking frame: a position and the directions not yet tried
/// from it. Sampling without replacement, no direction repeats per frame.
struct Frame {
    pos: (usize, usize),
    remaining: Vec<Direction>,
}

impl Frame {
    fn new(pos: (usize, usize)) -> Self {
        Self {
            pos,
            remaining: Direction::ALL.to_vec(),
        }
    }
}

impl Backtracker {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Checkerboard setup: `Unvisited` at every even/even position, `Wall`
    /// everywhere else, so unvisited cells start fully enclosed.
    fn lay_foundation(&self, grid: &mut BlockGrid) -> Result<(), MazeError> {
        let dim = grid.dim();
        for row in 0..dim {
            for column in 0..dim {
                let kind = if row % 2 == 0 && column % 2 == 0 {
                    CellKind::Unvisited
                } else {
                    CellKind::Wall
                };
                grid.set_cell(row, column, kind)?;
            }
        }

        // An even side length leaves the high corner off the lattice; open
        // the two cells nearest it so that corner stays reachable.
        if dim % 2 == 0 {
            grid.set_cell(dim - 1, dim - 1, CellKind::Unvisited)?;
            grid.set_cell(dim - 2, dim - 1, CellKind::Unvisited)?;
        }
        Ok(())
    }

    /// Walks from `from` one step at a time in `dir`. Stops at the grid
    /// edge, just before an `Empty` cell, or on the first `Unvisited` cell
    /// stepped onto; walls in between are walked over.
    fn walk(
        &self,
        grid: &BlockGrid,
        from: (usize, usize),
        dir: Direction,
    ) -> Result<(usize, usize), MazeError> {
        let mut pos = from;
        loop {
            let next = match dir.step(pos, grid.dim()) {
                Some(next) => next,
                None => break,
            };
            if grid.kind(next.0, next.1)? == CellKind::Empty {
                break;
            }
            pos = next;
            if grid.kind(pos.0, pos.1)? == CellKind::Unvisited {
                break;
            }
        }
        Ok(pos)
    }

    /// Opens every cell between `from` and `to` inclusive; the two share an
    /// axis, so one of the ranges is a single cell.
    fn carve(
        &self,
        grid: &mut BlockGrid,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<(), MazeError> {
        for row in from.0.min(to.0)..=from.0.max(to.0) {
            for column in from.1.min(to.1)..=from.1.max(to.1) {
                grid.set_cell(row, column, CellKind::Empty)?;
            }
        }
        Ok(())
    }
}

impl Generator for Backtracker {
    fn generate(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
    ) -> Result<(), MazeError> {
        let dim = grid.dim();
        self.lay_foundation(grid)?;
        steps.record(grid);

        let lattice = (dim + 1) / 2;
        let start = (
            self.rng.gen_range(0..lattice) * 2,
            self.rng.gen_range(0..lattice) * 2,
        );
        debug!("growing tree from {:?}", start);

        let mut stack = vec![Frame::new(start)];
        while let Some(frame) = stack.last_mut() {
            if frame.remaining.is_empty() {
                stack.pop();
                continue;
            }
            let pick = self.rng.gen_range(0..frame.remaining.len());
            let dir = frame.remaining.swap_remove(pick);
            let from = frame.pos;

            let reached = self.walk(grid, from, dir)?;
            if grid.kind(reached.0, reached.1)? == CellKind::Unvisited {
                self.carve(grid, from, reached)?;
                if reached != from {
                    steps.record(grid);
                    stack.push(Frame::new(reached));
                }
            }
        }

        grid.set_cell(0, 0, CellKind::Target)?;
        grid.set_cell(dim - 1, dim - 1, CellKind::Target)?;
        Ok(())
    }
}
