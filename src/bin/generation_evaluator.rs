use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shisen_solver::engine::Board;
use shisen_solver::logging::enable_verbose_logging;
use shisen_solver::solver::solve;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Measures playable-board generation cost across seeds", long_about = None)]
struct Args {
    #[clap(long, default_value_t = 8)]
    rows: usize,

    #[clap(long, default_value_t = 10)]
    cols: usize,

    /// Number of seeds to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// First seed; boards use consecutive seeds from here
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Print solver diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

struct Sample {
    seed: u64,
    attempts: u32,
    states_explored: usize,
    elapsed: Duration,
}

fn evaluate_seed(rows: usize, cols: usize, seed: u64) -> Result<Sample> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let started = Instant::now();
    let mut attempts = 0;
    let mut states_explored = 0;

    loop {
        let board = Board::generate(rows, cols, &mut rng)?;
        attempts += 1;
        if let Some(solution) = solve(&board) {
            states_explored += solution.states_explored;
            break;
        }
    }

    Ok(Sample {
        seed,
        attempts,
        states_explored,
        elapsed: started.elapsed(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        enable_verbose_logging();
    }

    println!(
        "Starting generation evaluation for {} boards of {}x{}...",
        args.boards, args.rows, args.cols
    );

    let mut samples = Vec::new();
    for seed in args.start_seed..args.start_seed + args.boards {
        let sample = evaluate_seed(args.rows, args.cols, seed)?;
        println!(
            "  Seed: {:<6} Attempts: {:<4} States: {:<8} Time: {:?}",
            sample.seed, sample.attempts, sample.states_explored, sample.elapsed
        );
        samples.push(sample);
    }

    println!("\n--- Evaluation Complete ---");
    if samples.is_empty() {
        println!("No boards evaluated.");
        return Ok(());
    }

    let count = samples.len() as f64;
    let total_attempts: u32 = samples.iter().map(|s| s.attempts).sum();
    let total_time: Duration = samples.iter().map(|s| s.elapsed).sum();
    let worst = samples
        .iter()
        .max_by_key(|s| s.elapsed)
        .map(|s| (s.seed, s.elapsed));

    println!("Average attempts: {:.2}", total_attempts as f64 / count);
    println!("Average time:     {:?}", total_time.div_f64(count));
    if let Some((seed, elapsed)) = worst {
        println!("Slowest seed:     {} ({:?})", seed, elapsed);
    }

    Ok(())
}
