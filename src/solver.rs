use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Direction};

/// Cell state private to one verification run. `Visited` is the sentinel
/// the search stamps over popped positions; it never appears in a
/// `BlockGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Kind(CellKind),
    Visited,
}

/// Reachability check over an attempt grid: true iff an orthogonal chain of
/// `Selected` or `Target` cells connects (0, 0) to a `Target` other than
/// (0, 0) itself.
///
/// Runs an explicit-stack depth-first search on a private copy of the
/// cells; the caller's grid is left untouched.
pub fn verify(attempt: &BlockGrid) -> bool {
    let dim = attempt.dim();
    let mut tiles: Vec<Tile> = attempt.cells().iter().map(|&kind| Tile::Kind(kind)).collect();
    let mut stack = vec![(0usize, 0usize)];

    while let Some((row, column)) = stack.pop() {
        if tiles[dim * row + column] == Tile::Kind(CellKind::Target) && (row, column) != (0, 0) {
            return true;
        }
        tiles[dim * row + column] = Tile::Visited;

        for dir in Direction::ALL {
            if let Some((r, c)) = dir.step((row, column), dim) {
                if let Tile::Kind(CellKind::Selected | CellKind::Target) = tiles[dim * r + c] {
                    stack.push((r, c));
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod test_solver {
    use super::*;
    use crate::error::MazeError;

    fn grid_from(codes: &[Vec<u8>]) -> BlockGrid {
        BlockGrid::from_codes(codes).unwrap()
    }

    #[test]
    fn selected_chain_between_targets_passes() {
        let mut codes = vec![vec![1u8; 5]; 5];
        codes[0][0] = 4;
        codes[4][4] = 4;
        // staircase of selected cells from corner to corner
        for (row, column) in [(0, 1), (1, 1), (1, 2), (2, 2), (2, 3), (3, 3), (3, 4)] {
            codes[row][column] = 3;
        }
        assert!(verify(&grid_from(&codes)));
    }

    #[test]
    fn disconnected_target_fails() {
        // all walls except a lone selected start and the far target
        let mut codes = vec![vec![1u8; 5]; 5];
        codes[0][0] = 3;
        codes[4][4] = 4;
        assert!(!verify(&grid_from(&codes)));
    }

    #[test]
    fn start_target_alone_does_not_count() {
        let mut codes = vec![vec![1u8; 5]; 5];
        codes[0][0] = 4;
        assert!(!verify(&grid_from(&codes)));
    }

    #[test]
    fn empty_cells_are_not_traversable() {
        let mut codes = vec![vec![0u8; 5]; 5];
        codes[0][0] = 4;
        codes[4][4] = 4;
        assert!(!verify(&grid_from(&codes)));
    }

    #[test]
    fn revisits_terminate() {
        // a selected loop around the start must not cycle forever
        let mut codes = vec![vec![1u8; 5]; 5];
        codes[0][0] = 4;
        for (row, column) in [(0, 1), (1, 1), (1, 0), (0, 2), (2, 0)] {
            codes[row][column] = 3;
        }
        assert!(!verify(&grid_from(&codes)));
    }

    #[test]
    fn caller_grid_is_untouched() {
        let mut codes = vec![vec![1u8; 5]; 5];
        codes[0][0] = 4;
        codes[0][1] = 3;
        codes[0][2] = 4;
        let grid = grid_from(&codes);
        let before = grid.clone();

        assert!(verify(&grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn attempts_keep_grid_validation() {
        assert_eq!(
            BlockGrid::from_codes(&vec![vec![0u8; 3]; 3]),
            Err(MazeError::InvalidDimension(3))
        );
    }
}
