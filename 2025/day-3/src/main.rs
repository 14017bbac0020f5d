use clap::Parser;
use miette::*;
use std::path::PathBuf;

use aoc2025_day_3::{solve, JoltageError};

/// Sums the largest joltage every battery bank can produce.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Puzzle input, one battery bank per line
    #[arg(default_value = "input/input.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input).map_err(|source| {
        JoltageError::InputUnavailable {
            path: args.input.clone(),
            source,
        }
    })?;

    let answers = solve(&input)?;
    println!("Part 1: {}", answers.part1);
    println!("Part 2: {}", answers.part2);
    Ok(())
}
