//! bitga CLI - evolve the reference 10-bit landscape and print every generation.

use anyhow::{Context, Result};
use bitga::ga::{GaEngine, Params};
use bitga::landscape::PiecewiseLandscape;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bitga")]
#[command(about = "Bitstring genetic algorithm over a piecewise fitness landscape")]
#[command(long_about = None)]
struct Cli {
    /// Crossing probability in [0.00, 1.00]
    #[arg(short = 'c', long, default_value_t = 0.9)]
    crossing: f64,

    /// Mutation probability in [0.00, 1.00]
    #[arg(short = 'm', long, default_value_t = 0.01)]
    mutation: f64,

    /// Iteration count
    #[arg(short = 'i', long, default_value_t = 30)]
    iterations: usize,

    /// Population size
    #[arg(short = 'p', long, default_value_t = 20)]
    population: usize,

    /// Random seed; omit to derive one from OS entropy
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Selection strategy: fitness-proportional or uniform
    #[arg(long, default_value = "fitness-proportional")]
    selection: String,

    /// Exempt the best member of each generation from mutation
    #[arg(long)]
    elitism: bool,

    /// Do not print the random seed diagnostic
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let params = Params {
        crossing: cli.crossing,
        mutation: cli.mutation,
        iterations: cli.iterations,
        population_size: cli.population,
        seed: cli.seed,
        selection: cli.selection,
        elitism: cli.elitism,
        trace: !cli.quiet,
    };

    let mut engine =
        GaEngine::new(PiecewiseLandscape::new(), params).context("invalid configuration")?;
    engine.initialize()?;

    while let Some(generation) = engine.step()? {
        println!("Generation {}", generation.index + 1);
        println!("{}", engine.report());
        println!();
    }

    Ok(())
}
