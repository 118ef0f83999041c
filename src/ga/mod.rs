//! Evolutionary graph-coloring engine.
//!
//! A fixed-policy genetic algorithm over vertex colorings. Each generation:
//!
//! 1. **Best tracking**: remember any coloring strictly better than the best
//!    seen so far (the run's result, independent of the live population)
//! 2. **Truncation selection**: rank by conflict count, keep the top 20–50%
//! 3. **Crossover**: pair parents at random; parents and their two
//!    single-point children all enter the next generation
//! 4. **Mutation**: recolor conflicting vertices of randomly sampled
//!    chromosomes, preferring colors unused by the neighborhood
//!
//! The population size is redrawn from `[min, max)` every generation.
//!
//! # Key Types
//!
//! - [`Chromosome`]: one coloring plus its cached conflict count
//! - [`SolverConfig`]: run parameters
//! - [`GeneticSolver`]: executes the loop
//! - [`SolveResult`]: best coloring and run statistics
//! - [`ReportSink`] / [`GenerationReport`]: progress reporting
//!
//! # Submodules
//!
//! - [`operators`]: random coloring, single-point crossover, conflict mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Hindi & Yampolskiy (2012), "Genetic Algorithm Applied to the Graph Coloring Problem"

mod config;
pub mod operators;
mod report;
mod runner;
mod selection;
mod types;

pub use config::SolverConfig;
pub use report::{GenerationReport, LogSink, NullSink, ReportSink};
pub use runner::{GeneticSolver, SolveResult};
pub use selection::{scaled_count, survivor_fraction, truncate, SURVIVOR_PERCENT};
pub use types::Chromosome;
