//! Square grid maze engine.
//!
//! Three generation algorithms over a shared grid representation (a
//! randomized depth-first growing tree, recursive division, and a cellular
//! automaton with a solvability repair pass), plus an append-only snapshot
//! history for stepwise playback and a reachability-based solution checker.
//! The engine only produces data; rendering, transport and persistence
//! belong to its callers.

pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod solver;
pub mod steps;

pub use error::MazeError;
pub use generators::{Generator, GeneratorKind};
pub use grids::block_grid::BlockGrid;
pub use grids::CellKind;
pub use maze::Maze;
pub use steps::{Snapshot, StepRecorder};
