use anyhow::{Context, Result};
use clap::Parser;
use shisen_solver::logging::enable_verbose_logging;
use shisen_solver::solver::solve;
use shisen_solver::utils::board_from_text;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a sequence of moves that clears a Shisen-Sho board", long_about = None)]
struct Args {
    /// Print solver diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,

    /// Path to the board file (one row per line, '.' for empty, A-Z/a-n for tiles)
    board_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        enable_verbose_logging();
    }

    let content = fs::read_to_string(&args.board_file)
        .with_context(|| format!("Failed to read file: {}", args.board_file.display()))?;
    let board = board_from_text(&content).context("Invalid board format")?;

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board);
    println!("Searching for a clearing sequence...\n");

    match solve(&board) {
        Some(solution) => {
            println!("Solution found ({} states explored):\n", solution.states_explored);
            if solution.moves.is_empty() {
                println!("  Board is already clear.");
            }
            let mut current = board;
            for (i, mv) in solution.moves.iter().enumerate() {
                let tile = current.get_tile(mv.first);
                let name = tile.symbol().map_or("?", |s| s.name());
                println!("  Move {}: {} ({})", i + 1, mv, name);
                current = current.remove_pair(mv.first, mv.second)?;
            }
        }
        None => println!("Board cannot be cleared.\n"),
    }

    Ok(())
}
