use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::MazeError;
use crate::generators::Generator;
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::steps::StepRecorder;

/// Recursive division generator.
///
/// Starts from open space and repeatedly splits a region with a cross of
/// walls. One of the four wall segments stays solid, the other three get a
/// single opening, then the four quadrants are divided in turn until they
/// are too small to split.
pub struct RecursiveDivider {
    rng: StdRng,
}

impl RecursiveDivider {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Divides the inclusive region rows `x_start..=x_end`, columns
    /// `y_start..=y_end`.
    fn subdivide(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
        x_start: usize,
        x_end: usize,
        y_start: usize,
        y_end: usize,
    ) -> Result<(), MazeError> {
        // split point, one cell of margin from every region edge
        let x = self.rng.gen_range(x_start + 1..x_end);
        let y = self.rng.gen_range(y_start + 1..y_end);
        debug!(
            "dividing rows {}..={} cols {}..={} at ({}, {})",
            x_start, x_end, y_start, y_end, x, y
        );

        for row in x_start..=x_end {
            grid.set_cell(row, y, CellKind::Wall)?;
        }
        for column in y_start..=y_end {
            grid.set_cell(x, column, CellKind::Wall)?;
        }

        // one opening per wall segment; one of the four stays solid
        let exclude = self.rng.gen_range(1..=4);
        if exclude != 1 {
            let column = self.rng.gen_range(y_start..y);
            grid.set_cell(x, column, CellKind::Empty)?;
        }
        if exclude != 2 {
            let column = self.rng.gen_range(y + 1..=y_end);
            grid.set_cell(x, column, CellKind::Empty)?;
        }
        if exclude != 3 {
            let row = self.rng.gen_range(x_start..x);
            grid.set_cell(row, y, CellKind::Empty)?;
        }
        if exclude != 4 {
            let row = self.rng.gen_range(x + 1..=x_end);
            grid.set_cell(row, y, CellKind::Empty)?;
        }

        // where the cross meets the region edge next to an already open
        // cell, open the boundary cell too so the region is not sealed off
        let dim = grid.dim();
        if x_start > 0 && grid.kind(x_start - 1, y)? == CellKind::Empty {
            grid.set_cell(x_start, y, CellKind::Empty)?;
        }
        if x_end < dim - 1 && grid.kind(x_end + 1, y)? == CellKind::Empty {
            grid.set_cell(x_end, y, CellKind::Empty)?;
        }
        if y_start > 0 && grid.kind(x, y_start - 1)? == CellKind::Empty {
            grid.set_cell(x, y_start, CellKind::Empty)?;
        }
        if y_end < dim - 1 && grid.kind(x, y_end + 1)? == CellKind::Empty {
            grid.set_cell(x, y_end, CellKind::Empty)?;
        }

        steps.record(grid);

        // quadrants with a side of 2 or fewer cells stay open space;
        // recursion depth is O(log dim), safe as native recursion
        if x - x_start > 2 && y - y_start > 2 {
            self.subdivide(grid, steps, x_start, x - 1, y_start, y - 1)?;
        }
        if x_end - x > 2 && y - y_start > 2 {
            self.subdivide(grid, steps, x + 1, x_end, y_start, y - 1)?;
        }
        if x - x_start > 2 && y_end - y > 2 {
            self.subdivide(grid, steps, x_start, x - 1, y + 1, y_end)?;
        }
        if x_end - x > 2 && y_end - y > 2 {
            self.subdivide(grid, steps, x + 1, x_end, y + 1, y_end)?;
        }
        Ok(())
    }
}

impl Generator for RecursiveDivider {
    fn generate(
        &mut self,
        grid: &mut BlockGrid,
        steps: &mut StepRecorder,
    ) -> Result<(), MazeError> {
        grid.fill(CellKind::Empty);
        steps.record(grid);

        let dim = grid.dim();
        self.subdivide(grid, steps, 0, dim - 1, 0, dim - 1)?;

        grid.set_cell(0, 0, CellKind::Target)?;
        grid.set_cell(dim - 1, dim - 1, CellKind::Target)?;
        Ok(())
    }
}
