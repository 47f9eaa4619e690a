//! Draws repeatedly from a weight table read from a config file and prints how often each item came up
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use nav_utility::config::{tally, ConfigError, RollSettings};
use nav_utility::weighted::SelectError;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: PathBuf,
    /// Number of draws, overriding the config file
    #[arg(short('n'), long)]
    draws: Option<usize>,
    /// Seed for a reproducible run, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Error)]
enum RollError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("selection failed: {0}")]
    Select(#[from] SelectError),
}

fn run(args: &Args) -> Result<(), RollError> {
    let settings = RollSettings::load(&args.config_file)?.with_overrides(args.draws, args.seed);
    let draws = settings.draws;
    log::info!("Drawing {} times (seed {:?})", draws, settings.seed);

    let counts = tally(&settings.table, draws, &mut settings.rng())?;

    println!("Item\tCount\tPercentage");
    for (item, count) in counts.iter() {
        let percentage = if draws == 0 {
            0.0
        } else {
            (100.0 * *count as f64) / draws as f64
        };
        println!("{}\t{}\t{:>5.2}%", item, count, percentage);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
