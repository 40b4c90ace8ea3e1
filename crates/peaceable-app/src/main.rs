//! Interactive console shell for the peaceable solver.
//!
//! Reads the board height, board width, queen count, and knight count (from
//! positional arguments when given, otherwise by prompting), then runs the
//! search and prints the first solution found, or `No solution`.

use std::{
    io::{self, Write as _},
    num::ParseIntError,
    process,
};

use clap::Parser;
use peaceable_core::Board;
use peaceable_solver::solve_with_stats;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board height (rows). Prompted for when omitted.
    #[arg(value_name = "HEIGHT")]
    height: Option<usize>,

    /// Board width (columns). Prompted for when omitted.
    #[arg(value_name = "WIDTH")]
    width: Option<usize>,

    /// Number of queens to place. Prompted for when omitted.
    #[arg(value_name = "QUEENS")]
    queens: Option<usize>,

    /// Number of knights to place. Prompted for when omitted.
    #[arg(value_name = "KNIGHTS")]
    knights: Option<usize>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum InputError {
    #[display("failed to read input: {_0}")]
    Io(#[from] io::Error),
    #[display("not a whole number: {_0}")]
    Parse(#[from] ParseIntError),
    #[display("value must be positive")]
    NonPositive,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let (height, width, queens, knights) = match gather_input(&args) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let (solution, stats) = solve_with_stats(Board::new(height, width), queens, knights);
    log::info!(
        "search visited {} nodes and tried {} placements",
        stats.nodes,
        stats.placements
    );

    println!("Solution:");
    match solution {
        Some(board) => print!("{board}"),
        None => println!("No solution"),
    }
}

fn gather_input(args: &Args) -> Result<(usize, usize, usize, usize), InputError> {
    let height = resolve("Board height", args.height)?;
    let width = resolve("Board width", args.width)?;
    let queens = resolve("Queen count", args.queens)?;
    let knights = resolve("Knight count", args.knights)?;
    Ok((height, width, queens, knights))
}

/// Takes the argument value when present, prompts for one otherwise, and
/// rejects zero either way.
fn resolve(label: &str, value: Option<usize>) -> Result<usize, InputError> {
    let value = match value {
        Some(value) => value,
        None => prompt(label)?,
    };
    if value == 0 {
        return Err(InputError::NonPositive);
    }
    Ok(value)
}

fn prompt(label: &str) -> Result<usize, InputError> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}
