use anyhow::Result;
use clap::{Parser, ValueEnum};

use maze_engine::{GeneratorKind, Maze};

#[derive(Parser)]
#[command(name = "maze-engine")]
#[command(about = "Generate and print square grid mazes")]
struct Cli {
    /// Side length of the maze, 5 to 20
    #[arg(short, long, default_value_t = 9)]
    dimensions: usize,

    /// Generation algorithm
    #[arg(short, long, value_enum, default_value = "dfs")]
    algorithm: Algorithm,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print how many playback steps were recorded
    #[arg(long)]
    show_steps: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Dfs,
    Division,
    Automata,
}

impl From<Algorithm> for GeneratorKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Dfs => GeneratorKind::Dfs,
            Algorithm::Division => GeneratorKind::RecursiveDivision,
            Algorithm::Automata => GeneratorKind::CellularAutomata,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut maze = Maze::new(cli.dimensions)?;
    match cli.seed {
        Some(seed) => maze.generate_seeded(cli.algorithm.into(), seed)?,
        None => maze.generate(cli.algorithm.into())?,
    }

    for row in maze.values() {
        let line: String = row
            .iter()
            .map(|&code| match code {
                1 => '#',
                4 => 'X',
                _ => '.',
            })
            .collect();
        println!("{line}");
    }

    if cli.show_steps {
        println!("{} steps recorded", maze.step_recorder().len());
    }
    Ok(())
}
