//! Benchmarks weighted selection by timing repeated draws from a synthetic table
use clap::Parser;
use nav_utility::weighted::{select_one, SelectError, WeightTable};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Distinct items in the table
    #[arg(short, long, default_value_t = 20)]
    items: u32,
    #[arg(short, long, default_value_t = 100000)]
    draws: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
}

fn run_benchmark(table: &WeightTable<u32>, draws: usize) -> Result<f64, SelectError> {
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    for _ in 0..draws {
        select_one(table, &mut rng)?;
    }
    let elapsed = start.elapsed();
    let draws_per_second = draws as f64 / elapsed.as_secs_f64();
    println!(
        "{} draws in {:.2} seconds ({:.2} draws per second)",
        draws,
        &elapsed.as_secs_f64(),
        draws_per_second
    );
    Ok(elapsed.as_secs_f64())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::info!(
        "Benchmarking {} episodes of {} draws over {} items",
        args.episodes,
        args.draws,
        args.items
    );

    // Weights 1..=items, so every item can come up
    let table: WeightTable<u32> = (0..args.items).map(|i| (i, i64::from(i) + 1)).collect();

    let mut total_seconds = 0.0;
    for _ in 0..args.episodes {
        match run_benchmark(&table, args.draws) {
            Ok(seconds) => total_seconds += seconds,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }
    if args.episodes > 0 {
        println!(
            "Overall: {:.2} draws per second over {} items",
            (args.episodes * args.draws) as f64 / total_seconds,
            args.items
        );
    }
}
