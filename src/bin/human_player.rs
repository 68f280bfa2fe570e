use anyhow::Result;
use clap::Parser;
use shisen_solver::config::GameConfig;
use shisen_solver::engine::Position;
use shisen_solver::game::{Game, GameStatus};
use shisen_solver::logging::enable_verbose_logging;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play Shisen-Sho in the terminal", long_about = None)]
struct Args {
    /// TOML config file; missing keys use defaults
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Board rows (overrides the config file)
    #[clap(long)]
    rows: Option<usize>,

    /// Board columns (overrides the config file)
    #[clap(long)]
    cols: Option<usize>,

    /// RNG seed for reproducible boards
    #[clap(long)]
    seed: Option<u64>,

    /// Print engine diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn parse_move(input: &str) -> Option<(Position, Position)> {
    let nums: Vec<usize> = input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match nums.as_slice() {
        &[r1, c1, r2, c2] => Some((Position::new(r1, c1), Position::new(r2, c2))),
        _ => None,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        enable_verbose_logging();
    }
    let config = load_config(&args)?;
    let mut rng = config.make_rng();

    println!("Generating a {}x{} board...", config.rows, config.cols);
    let mut game = Game::new_playable(&config, &mut rng)?;
    println!("Welcome to Shisen-Sho!");

    let mut highlight: Vec<Position> = Vec::new();
    loop {
        println!("---------------------");
        println!("Moves: {}, Score: {}", game.moves(), game.score());
        println!("{}", game.board().to_string_with_highlight(&highlight));
        highlight.clear();

        match game.status() {
            GameStatus::Won => {
                println!();
                println!("---------------------");
                println!("🎉 BOARD CLEARED! 🎉");
                println!("Final Score: {}", game.score());
                println!("Total Moves: {}", game.moves());
                println!("---------------------");
                break;
            }
            GameStatus::Stuck => println!("No valid moves left. Use 's' to shuffle."),
            GameStatus::Playing => {}
        }

        print!("Enter a pair (r1 c1 r2 c2), 'h' hint, 's' shuffle, 'u' undo, 'q' quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (already at initial state).");
                }
            }
            "h" => match game.hint() {
                Some(mv) => {
                    println!("Try {}", mv);
                    highlight.extend(mv.positions());
                }
                None => println!("No moves available. Use 's' to shuffle."),
            },
            "s" => match game.shuffle(&mut rng) {
                GameStatus::Stuck => println!("Shuffled, but still no moves. Try again."),
                _ => println!("Tiles shuffled."),
            },
            other => match parse_move(other) {
                Some((a, b)) => match game.process_move(a, b) {
                    Ok(true) => println!("Pair removed."),
                    Ok(false) => println!("Those tiles do not match or cannot be connected with two turns or fewer."),
                    Err(e) => println!("Invalid coordinates: {}", e),
                },
                None => println!("Invalid input format. Use 'r1 c1 r2 c2', 'h', 's', 'u', or 'q'."),
            },
        }
    }

    Ok(())
}
