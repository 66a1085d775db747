use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::Parser;
use salesman::{
    io::read_catalogue_file,
    rng::SeedPolicy,
    search::{Construction, SearchOptions},
    solve,
};
use tracing_subscriber::EnvFilter;

/// Random-restart segment-reversal search for short TSP tours.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// City file: six header lines, then `<id> <x> <y>` per line.
    input: PathBuf,

    /// Random restarts per worker.
    iterations: usize,

    /// Number of workers; defaults to the available parallelism.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Seed every worker once from this value instead of the wall clock.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Build base tours with a linear-time shuffle instead of rejection sampling.
    #[arg(long)]
    shuffle: bool,

    /// Neighborhood size from which candidate costs are evaluated in parallel.
    #[arg(long)]
    parallel_threshold: Option<usize>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_logging(&opts.log_level);

    let catalogue = read_catalogue_file(&opts.input)
        .with_context(|| format!("failed to load cities from {}", opts.input.display()))?;

    let workers = opts.workers.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    });

    let mut builder = SearchOptions::builder().iterations(opts.iterations);
    if let Some(seed) = opts.seed {
        builder = builder.seed_policy(SeedPolicy::Fixed(seed));
    }
    if opts.shuffle {
        builder = builder.construction(Construction::Shuffle);
    }
    if let Some(threshold) = opts.parallel_threshold {
        builder = builder.parallel_threshold(threshold);
    }
    let options = builder.build();

    println!("Number of Cities: {}", catalogue.len());

    let report = solve(&catalogue, &options, workers)
        .map_err(|err| {
            let stage = err.stage();
            anyhow::Error::new(err).context(format!("run failed during {}", stage))
        })?;
    println!("{}", report);

    Ok(())
}
