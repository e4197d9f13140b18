//! Command-line driver: loads an item catalogue, anneals, prints the packing.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use knapsack_anneal::knapsack::{catalogue, KnapsackProblem};
use knapsack_anneal::sa::{CoolingSchedule, SaConfig, SaRunner};

/// Simulated-annealing solver for the 0/1 knapsack problem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Catalogue file: a header row, then name,value,weight,volume rows.
    catalogue: PathBuf,

    /// Maximum total weight of the packing.
    #[arg(long)]
    max_weight: i64,

    /// Maximum total volume of the packing.
    #[arg(long)]
    max_volume: i64,

    /// Starting temperature.
    #[arg(long, default_value_t = 10_000.0)]
    initial_temperature: f64,

    /// Temperature at which the search stops.
    #[arg(long, default_value_t = 0.0001)]
    end_temperature: f64,

    /// Multiplicative cooling factor in (0, 1).
    #[arg(long, default_value_t = 0.9999, conflicts_with = "cooling_step")]
    cooling_rate: f64,

    /// Subtractive cooling step; replaces the multiplicative schedule.
    #[arg(long)]
    cooling_step: Option<f64>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let items = catalogue::load(&args.catalogue)?;
    let problem = KnapsackProblem::new(items, args.max_weight, args.max_volume);

    let cooling = match args.cooling_step {
        Some(step) => CoolingSchedule::Additive { step },
        None => CoolingSchedule::Geometric {
            rate: args.cooling_rate,
        },
    };

    let mut config = SaConfig::default()
        .with_initial_temperature(args.initial_temperature)
        .with_end_temperature(args.end_temperature)
        .with_cooling(cooling);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let initial = problem.random_solution(&mut rand::rng());
    let result = SaRunner::run(&problem, initial, &config)?;

    println!("packed items:");
    for item in problem.packed(&result.solution) {
        println!(
            "  {} (value {}, weight {}, volume {})",
            item.name, item.value, item.weight, item.volume
        );
    }
    println!("reward: {}", result.reward);

    Ok(())
}
