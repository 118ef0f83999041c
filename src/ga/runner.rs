//! Evolutionary loop execution.
//!
//! [`GeneticSolver`] orchestrates the complete evolutionary process:
//! initialization → best tracking → selection → crossover → mutation → repeat.

use super::config::SolverConfig;
use super::operators::{conflict_mutation, random_coloring};
use super::report::{GenerationReport, ReportSink};
use super::selection::{scaled_count, truncate};
use super::types::Chromosome;
use crate::error::ConfigError;
use crate::graph::Graph;
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// The best coloring found during the entire run.
    ///
    /// Only `None` for a run that never produced a population, which a
    /// validated configuration rules out.
    pub best: Option<Chromosome>,

    /// Generation index at which the run stopped.
    pub generations: usize,

    /// Whether a conflict-free coloring was found.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-known conflict count after every tracking pass.
    pub conflict_history: Vec<usize>,
}

impl SolveResult {
    /// Conflict count of the best coloring.
    pub fn best_conflicts(&self) -> Option<usize> {
        self.best.as_ref().map(Chromosome::conflicts)
    }
}

/// Evolutionary graph-coloring solver.
///
/// Owns the population, the parent pool and the best-known coloring. All
/// randomness comes from the single generator handed in at construction.
///
/// # Usage
///
/// ```
/// use gacolor::ga::{GeneticSolver, NullSink, SolverConfig};
/// use gacolor::graph::Graph;
///
/// let mut graph = Graph::new(4);
/// for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
///     graph.add_edge(a, b, 1);
/// }
///
/// let config = SolverConfig::default()
///     .with_max_colors(2)
///     .with_max_generations(200)
///     .with_seed(42);
/// let mut solver = GeneticSolver::from_config(&graph, config)?;
/// let result = solver.solve(&mut NullSink);
///
/// assert!(result.best_conflicts().is_some());
/// # Ok::<(), gacolor::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct GeneticSolver<'g, R: Rng = StdRng> {
    graph: &'g Graph,
    config: SolverConfig,
    rng: R,
    population: Vec<Chromosome>,
    parent_pool: Vec<Chromosome>,
    best: Option<Chromosome>,
    generation: usize,
    conflict_history: Vec<usize>,
}

impl<'g> GeneticSolver<'g, StdRng> {
    /// Creates a solver whose generator is seeded from `config.seed`
    /// (or from entropy when unset).
    pub fn from_config(graph: &'g Graph, config: SolverConfig) -> Result<Self, ConfigError> {
        let rng = rng_from_seed(config.seed);
        Self::new(graph, config, rng)
    }
}

impl<'g, R: Rng> GeneticSolver<'g, R> {
    /// Creates a solver drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the generator is already chosen.
    pub fn new(graph: &'g Graph, config: SolverConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            graph,
            population: Vec::with_capacity(config.max_population_size),
            parent_pool: Vec::new(),
            config,
            rng,
            best: None,
            generation: 0,
            conflict_history: Vec::new(),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The live population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best coloring seen so far.
    pub fn best(&self) -> Option<&Chromosome> {
        self.best.as_ref()
    }

    /// Current generation index.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs the search to completion.
    pub fn solve<S: ReportSink + ?Sized>(&mut self, sink: &mut S) -> SolveResult {
        self.solve_with_cancel(sink, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled at the top of every generation. A cancelled run
    /// still performs the final tracking pass and final report.
    pub fn solve_with_cancel<S: ReportSink + ?Sized>(
        &mut self,
        sink: &mut S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult {
        log::info!(
            "coloring {} vertices / {} edges with {} colors, up to {} generations",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.config.max_colors,
            self.config.max_generations
        );

        self.initialize();
        let mut cancelled = false;

        while self.generation < self.config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            self.track_best();
            if self.is_solved() {
                break;
            }
            if self.generation % self.config.report_frequency == 0 {
                sink.report(&self.snapshot(false));
            }

            self.select();
            self.crossover();
            self.mutate();
            self.generation += 1;
        }

        self.track_best();
        sink.report(&self.snapshot(true));

        let solved = self.is_solved();
        log::info!(
            "stopped at generation {} (solved: {}, cancelled: {}, best conflicts: {:?})",
            self.generation,
            solved,
            cancelled,
            self.best.as_ref().map(Chromosome::conflicts)
        );

        SolveResult {
            best: self.best.clone(),
            generations: self.generation,
            solved,
            cancelled,
            conflict_history: self.conflict_history.clone(),
        }
    }

    /// Replaces the population with a fresh random one of random size in
    /// `[min_population_size, max_population_size)` and resets the run state.
    pub fn initialize(&mut self) {
        self.population.clear();
        self.parent_pool.clear();
        self.best = None;
        self.generation = 0;
        self.conflict_history.clear();

        let size = self.draw_population_size();
        for _ in 0..size {
            let individual = self.random_individual();
            self.population.push(individual);
        }
        log::debug!("initial population: {size} chromosomes");
    }

    /// Records any chromosome strictly better than the best known so far.
    ///
    /// Ties never replace the stored best.
    pub fn track_best(&mut self) {
        for chromosome in &self.population {
            let improves = match &self.best {
                None => true,
                Some(best) => chromosome.conflicts() < best.conflicts(),
            };
            if improves {
                self.best = Some(chromosome.clone());
            }
        }
        if let Some(best) = &self.best {
            self.conflict_history.push(best.conflicts());
        }
    }

    /// Truncation selection: keeps the top 20–50% as the parent pool and
    /// empties the population.
    pub fn select(&mut self) {
        self.parent_pool = truncate(&mut self.population, &mut self.rng);
        log::debug!(
            "generation {}: {} parents selected",
            self.generation,
            self.parent_pool.len()
        );
    }

    /// Pairs parents until the drawn generation size is met.
    ///
    /// Each consumed pair is copied into the new population together with
    /// its two children. If the pool runs out first, the shortfall is filled
    /// with random chromosomes. Parents never drawn are dropped.
    pub fn crossover(&mut self) {
        let target = self.draw_population_size();
        let mut required = target as isize - self.parent_pool.len() as isize;

        while required > 0 && self.parent_pool.len() >= 2 {
            let i = self.rng.random_range(0..self.parent_pool.len());
            let parent = self.parent_pool.swap_remove(i);
            let j = self.rng.random_range(0..self.parent_pool.len());
            let partner = self.parent_pool.swap_remove(j);

            let graph = self.graph;
            let children = parent.breed_with(&partner, &mut self.rng, |c| graph.conflict_count(c));

            self.population.push(parent);
            self.population.push(partner);
            required -= children.len() as isize;
            self.population.extend(children);
        }

        let backfill = required.max(0) as usize;
        for _ in 0..backfill {
            let individual = self.random_individual();
            self.population.push(individual);
        }
        if backfill > 0 {
            log::debug!(
                "generation {}: parent pool exhausted, {} random chromosomes added",
                self.generation,
                backfill
            );
        }

        self.parent_pool.clear();
    }

    /// Mutates `round(len * mutation_rate)` chromosomes, sampled with
    /// replacement, and recomputes each mutant's conflict count in full.
    pub fn mutate(&mut self) {
        let mutants = scaled_count(self.population.len(), self.config.mutation_rate);
        for _ in 0..mutants {
            let idx = self.rng.random_range(0..self.population.len());
            let mutant = &mut self.population[idx];

            let mut colors = mutant.colors();
            conflict_mutation(&mut colors, self.graph, self.config.max_colors, &mut self.rng);
            let conflicts = self.graph.conflict_count(&colors);
            mutant.set_coloring(colors, conflicts);
        }
    }

    fn is_solved(&self) -> bool {
        self.best.as_ref().is_some_and(|b| b.conflicts() == 0)
    }

    fn draw_population_size(&mut self) -> usize {
        self.rng
            .random_range(self.config.min_population_size..self.config.max_population_size)
    }

    fn random_individual(&mut self) -> Chromosome {
        let colors = random_coloring(
            self.graph.vertex_count(),
            self.config.max_colors,
            &mut self.rng,
        );
        let conflicts = self.graph.conflict_count(&colors);
        Chromosome::new(colors, conflicts)
    }

    fn snapshot(&self, is_final: bool) -> GenerationReport<'_> {
        GenerationReport {
            generation: self.generation,
            population_size: self.population.len(),
            best_colors: self.best.as_ref().map(Chromosome::as_colors),
            best_conflicts: self.best.as_ref().map(Chromosome::conflicts),
            is_final,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
