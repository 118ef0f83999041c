//! Truncation selection.
//!
//! The population is ranked by conflict count and only a leading fraction
//! survives as the parent pool. The fraction is redrawn every generation,
//! which varies selection pressure over the run.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Survivor fraction bounds as whole percentages, `[20, 50)`.
pub const SURVIVOR_PERCENT: std::ops::Range<u32> = 20..50;

/// Draws this generation's survivor fraction from [`SURVIVOR_PERCENT`].
pub fn survivor_fraction<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(SURVIVOR_PERCENT) as f64 / 100.0
}

/// `round(count * fraction)` with ties to even.
pub fn scaled_count(count: usize, fraction: f64) -> usize {
    (count as f64 * fraction).round_ties_even() as usize
}

/// Truncation selection.
///
/// Sorts `population` ascending by conflict count (stable, so equal counts
/// keep their current order), moves the best
/// `round(len * survivor_fraction)` chromosomes into the returned pool and
/// leaves `population` empty.
pub fn truncate<R: Rng>(population: &mut Vec<Chromosome>, rng: &mut R) -> Vec<Chromosome> {
    population.sort_by_key(Chromosome::conflicts);

    let fraction = survivor_fraction(rng);
    let pool_size = scaled_count(population.len(), fraction).min(population.len());

    let pool: Vec<Chromosome> = population.drain(..pool_size).collect();
    population.clear();
    pool
}
