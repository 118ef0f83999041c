//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the evolutionary loop.
//! It is fixed for the duration of a run.

use crate::error::ConfigError;

/// Configuration for the coloring solver.
///
/// # Defaults
///
/// ```
/// use gacolor::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.min_population_size, 10);
/// assert_eq!(config.max_population_size, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gacolor::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_generations(500)
///     .with_population_range(20, 60)
///     .with_max_colors(4)
///     .with_mutation_rate(0.08)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Generation budget. The run stops earlier if a conflict-free coloring
    /// is found.
    pub max_generations: usize,

    /// Lower bound (inclusive) of every drawn population size.
    pub min_population_size: usize,

    /// Upper bound (exclusive) of every drawn population size.
    pub max_population_size: usize,

    /// Fraction of the population mutated each generation (0.0–1.0).
    ///
    /// Mutants are sampled with replacement, so the same chromosome can be
    /// mutated more than once per generation.
    pub mutation_rate: f64,

    /// Number of colors available; genes take values `1..=max_colors`.
    pub max_colors: usize,

    /// Generations between progress reports. A final report is always
    /// emitted.
    pub report_frequency: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_generations: 100,
            min_population_size: 10,
            max_population_size: 30,
            mutation_rate: 0.05,
            max_colors: 3,
            report_frequency: 1,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the population size range `[min, max)`.
    pub fn with_population_range(mut self, min: usize, max: usize) -> Self {
        self.min_population_size = min;
        self.max_population_size = max;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of available colors.
    pub fn with_max_colors(mut self, k: usize) -> Self {
        self.max_colors = k;
        self
    }

    /// Sets the report interval in generations.
    pub fn with_report_frequency(mut self, every: usize) -> Self {
        self.report_frequency = every;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_population_size < 1 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.max_population_size <= self.min_population_size {
            return Err(ConfigError::EmptyPopulationRange {
                min: self.min_population_size,
                max: self.max_population_size,
            });
        }
        if self.max_colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.report_frequency == 0 {
            return Err(ConfigError::ZeroReportFrequency);
        }
        Ok(())
    }
}
