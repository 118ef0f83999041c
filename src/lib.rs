//! Graph coloring by evolutionary search.
//!
//! Searches for a coloring of an undirected graph with as few conflicting
//! edges (both endpoints sharing a color) as possible, using a generational
//! genetic algorithm:
//!
//! - **Graph model** ([`graph`]): edge list with adjacency and the
//!   conflict-count objective, plus a loader for the `<from>-<to>` text format.
//! - **Chromosome** ([`ga::Chromosome`]): one coloring with its cached
//!   conflict count; single-point crossover with an injected fitness function.
//! - **Engine** ([`ga::GeneticSolver`]): truncation selection, parent-preserving
//!   crossover and conflict-directed mutation over a population whose size
//!   varies every generation.
//!
//! The search is single-threaded and draws every random decision from one
//! explicitly supplied generator, so seeded runs are reproducible.
//!
//! ```
//! use gacolor::ga::{GeneticSolver, NullSink, SolverConfig};
//! use gacolor::graph::parse_graph;
//!
//! let def = parse_graph("3 2\n1-2\n2-3\n", 0)?;
//! let config = SolverConfig::default()
//!     .with_max_colors(def.color_count)
//!     .with_seed(7);
//! let mut solver = GeneticSolver::from_config(&def.graph, config)?;
//! let result = solver.solve(&mut NullSink);
//! assert!(result.best_conflicts().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod ga;
pub mod graph;
pub mod random;

pub use error::{ConfigError, LoadError};
