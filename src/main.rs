use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use bimaru::{Bimaru, Puzzle, SearchStrategy};

/// Solve battleship solitaire (bimaru) puzzles.
#[derive(Parser)]
#[command(about, version)]
struct Args {
    /// Puzzle file; standard input when omitted
    input: Option<PathBuf>,

    /// Search strategy; `auto` picks from the hint count
    #[arg(short, long, value_enum, default_value_t = SearchArg::Auto)]
    search: SearchArg,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
enum SearchArg {
    Auto,
    DepthFirst,
    BestFirst,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let puzzle = match read_puzzle(args.input.as_deref()) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let solver = Bimaru::new(puzzle);
    let solution = match args.search {
        SearchArg::Auto => solver.solve(),
        SearchArg::DepthFirst => solver.solve_with(SearchStrategy::DepthFirst),
        SearchArg::BestFirst => solver.solve_with(SearchStrategy::BestFirst),
    };

    match solution {
        Some(board) => print!("{}", board),
        None => println!("There is no solution available. Better luck next time :)"),
    }
    ExitCode::SUCCESS
}

fn read_puzzle(path: Option<&Path>) -> Result<Puzzle, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Puzzle::from_reader(BufReader::new(File::open(path)?))?),
        None => Ok(Puzzle::from_reader(io::stdin().lock())?),
    }
}
