use maze_engine::{GeneratorKind, Maze, MazeError};

/// Marks every empty cell of a finished maze as selected, the way a player
/// submitting "everything open is my path" would.
fn select_empty(values: &[Vec<u8>]) -> Vec<Vec<u8>> {
    values
        .iter()
        .map(|row| {
            row.iter()
                .map(|&code| if code == 0 { 3 } else { code })
                .collect()
        })
        .collect()
}

#[test]
fn dimension_range_is_enforced() {
    for dim in 5..=20 {
        let maze = Maze::new(dim).unwrap();
        assert_eq!(maze.dimensions(), dim);
        assert_eq!(maze.values().len(), dim);
        assert!(maze.values().iter().all(|row| row.len() == dim));
    }
    assert_eq!(Maze::new(4).unwrap_err(), MazeError::InvalidDimension(4));
    assert_eq!(Maze::new(21).unwrap_err(), MazeError::InvalidDimension(21));
}

#[test]
fn dfs_maze_on_a_small_grid() {
    let mut maze = Maze::new(5).unwrap();
    maze.generate_seeded(GeneratorKind::Dfs, 11).unwrap();

    let values = maze.values();
    assert_eq!(values[0][0], 4);
    assert_eq!(values[4][4], 4);
    let targets = values
        .iter()
        .flatten()
        .filter(|&&code| code == 4)
        .count();
    assert_eq!(targets, 2);

    // untouched output is not a solution, selecting the open cells is
    assert!(!maze.check_solution(&values).unwrap());
    assert!(maze.check_solution(&select_empty(&values)).unwrap());
}

#[test]
fn every_generator_yields_a_solvable_maze() {
    for kind in [
        GeneratorKind::Dfs,
        GeneratorKind::RecursiveDivision,
        GeneratorKind::CellularAutomata,
    ] {
        for seed in 0..10 {
            for dim in [5, 12, 20] {
                let mut maze = Maze::new(dim).unwrap();
                maze.generate_seeded(kind, seed).unwrap();

                let values = maze.values();
                // finished mazes hold only empty, wall and target codes
                assert!(values
                    .iter()
                    .flatten()
                    .all(|&code| code == 0 || code == 1 || code == 4));
                assert_eq!(values[0][0], 4);
                assert_eq!(values[dim - 1][dim - 1], 4);

                assert!(maze.check_solution(&select_empty(&values)).unwrap());
            }
        }
    }
}

#[test]
fn step_history_grows_and_matches_the_run() {
    let mut maze = Maze::new(9).unwrap();
    maze.generate_seeded(GeneratorKind::Dfs, 4).unwrap();

    let steps = maze.steps();
    assert!(!steps.is_empty());
    for step in &steps {
        assert_eq!(step.len(), 9);
        assert!(step.iter().all(|row| row.len() == 9));
    }

    // consecutive snapshots differ while carving is underway
    for pair in steps.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }

    // the last snapshot is the grid just before the corners were marked
    let last = steps.last().unwrap();
    let values = maze.values();
    for row in 0..9 {
        for column in 0..9 {
            if (row, column) == (0, 0) || (row, column) == (8, 8) {
                assert_ne!(last[row][column], 4);
            } else {
                assert_eq!(last[row][column], values[row][column]);
            }
        }
    }
}

#[test]
fn walled_attempt_with_unreachable_target_fails() {
    let mut maze = Maze::new(5).unwrap();
    maze.generate_seeded(GeneratorKind::RecursiveDivision, 9).unwrap();

    let mut attempt = vec![vec![1u8; 5]; 5];
    attempt[0][0] = 3;
    attempt[4][4] = 4;
    assert!(!maze.check_solution(&attempt).unwrap());
}

#[test]
fn seeded_runs_are_reproducible() {
    for kind in [
        GeneratorKind::Dfs,
        GeneratorKind::RecursiveDivision,
        GeneratorKind::CellularAutomata,
    ] {
        let mut one = Maze::new(10).unwrap();
        let mut two = Maze::new(10).unwrap();
        one.generate_seeded(kind, 77).unwrap();
        two.generate_seeded(kind, 77).unwrap();

        assert_eq!(one.values(), two.values());
        assert_eq!(one.steps(), two.steps());
    }
}

#[test]
fn unseeded_generation_still_produces_a_valid_maze() {
    let mut maze = Maze::new(6).unwrap();
    maze.generate(GeneratorKind::Dfs).unwrap();

    let values = maze.values();
    assert_eq!(values[0][0], 4);
    assert_eq!(values[5][5], 4);
    assert!(maze.check_solution(&select_empty(&values)).unwrap());
}
