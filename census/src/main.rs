//! Census aggregation benchmark
//!
//! Seeds a sample census and times repeated aggregate queries over it.

use census::sample::{seed_households, SampleSpec};
use census::{compute_aggregates, DemographicSummary, Registry};
use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_HOUSEHOLDS: usize = 10_000;
const DEFAULT_ITERATIONS: u32 = 100;
const DEFAULT_SEED: u64 = 12345;

#[derive(Parser, Debug)]
#[command(name = "census-bench")]
#[command(about = "Time demographic aggregation over a generated census")]
struct Args {
    /// Number of generated households
    #[arg(default_value_t = DEFAULT_HOUSEHOLDS)]
    households: usize,

    /// Number of aggregate queries to time
    #[arg(default_value_t = DEFAULT_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Random seed for the generated census
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let Args {
        households,
        iterations,
        seed,
    } = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Census benchmark starting...");

    let today = Local::now().date_naive();
    let mut registry = Registry::new();
    let mut rng = StdRng::seed_from_u64(seed);
    seed_households(
        &mut registry,
        SampleSpec {
            households,
            ..SampleSpec::default()
        },
        today,
        &mut rng,
    );
    info!("Registry ready. Population: {}", registry.population_count());

    info!("Running {} aggregate queries...", iterations);
    let start = std::time::Instant::now();
    let mut summary = DemographicSummary::default();
    for _ in 0..iterations {
        summary = compute_aggregates(&registry, today).summary();
    }
    let elapsed = start.elapsed();

    info!(
        "Benchmark complete: {:?} total, {:?} per query",
        elapsed,
        elapsed / iterations
    );
    info!("Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
