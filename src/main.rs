//! gacolor CLI entry point.
//!
//! Loads a graph definition, runs the evolutionary coloring search and
//! prints progress reports to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use gacolor::ga::{GenerationReport, GeneticSolver, SolverConfig};
use gacolor::graph::{load_graph, DEFAULT_WEIGHT_SEED};
use std::path::PathBuf;

/// gacolor version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "gacolor")]
#[command(version = VERSION)]
#[command(about = "Graph coloring by evolutionary search", long_about = None)]
struct Args {
    /// Graph definition: '<vertices> <colors>' header, then one '<from>-<to>' edge per line
    input: PathBuf,

    /// Maximum number of generations
    #[arg(long, default_value = "100")]
    generations: usize,

    /// Minimum population size (inclusive)
    #[arg(long, default_value = "10")]
    min_population: usize,

    /// Maximum population size (exclusive)
    #[arg(long, default_value = "30")]
    max_population: usize,

    /// Fraction of the population mutated per generation
    #[arg(long, default_value = "0.05")]
    mutation_rate: f64,

    /// Number of colors (overrides the value in the graph file)
    #[arg(short = 'k', long)]
    colors: Option<usize>,

    /// Report every N generations
    #[arg(long, default_value = "1")]
    report_every: usize,

    /// Seed for the search (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for edge weight generation
    #[arg(long, default_value_t = DEFAULT_WEIGHT_SEED)]
    weight_seed: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("gacolor {} - starting", VERSION);

    let def = load_graph(&args.input, args.weight_seed)
        .with_context(|| format!("failed to load graph from {}", args.input.display()))?;

    println!("Loaded graph:\n");
    println!("{}", def.graph);

    let mut config = SolverConfig {
        max_generations: args.generations,
        min_population_size: args.min_population,
        max_population_size: args.max_population,
        mutation_rate: args.mutation_rate,
        max_colors: args.colors.unwrap_or(def.color_count),
        report_frequency: args.report_every,
        seed: args.seed,
    };
    if config.seed.is_none() {
        let seed = rand::random();
        log::info!("using random seed {seed}");
        config.seed = Some(seed);
    }

    let mut solver =
        GeneticSolver::from_config(&def.graph, config).context("invalid solver configuration")?;

    let mut print_report = |report: &GenerationReport<'_>| println!("{report}\n");
    let result = solver.solve(&mut print_report);

    match result.best_conflicts() {
        Some(0) => println!("Found a valid coloring at generation {}", result.generations),
        Some(k) => println!(
            "No valid coloring within {} generations; best has {} bad edges",
            result.generations, k
        ),
        None => println!("No coloring produced"),
    }

    Ok(())
}
