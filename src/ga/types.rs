//! The candidate solution: a coloring plus its cached conflict count.

use super::operators::single_point_crossover;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// One candidate coloring of the graph.
///
/// `colors[i]` is the color of vertex `i + 1`, in `1..=max_colors`.
/// `conflicts` must always equal the graph's conflict count for the current
/// `colors`; the two are only ever set together, either at construction or
/// through [`set_coloring`](Chromosome::set_coloring).
///
/// Lower conflict count is better. Equality compares both the coloring and
/// the count, while [`cmp_fitness`](Chromosome::cmp_fitness) compares the
/// count alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    colors: Vec<usize>,
    conflicts: usize,
}

impl Chromosome {
    /// Wraps a coloring and its precomputed conflict count.
    ///
    /// The caller is responsible for `conflicts` matching `colors`.
    pub fn new(colors: Vec<usize>, conflicts: usize) -> Self {
        Self { colors, conflicts }
    }

    /// Returns an independent copy of the coloring.
    ///
    /// Mutating the returned vector never affects the chromosome.
    pub fn colors(&self) -> Vec<usize> {
        self.colors.clone()
    }

    /// Read-only view of the coloring.
    pub fn as_colors(&self) -> &[usize] {
        &self.colors
    }

    /// Number of conflicting edges ("bad edges") under this coloring.
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    /// Number of genes (vertices).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Replaces the coloring and its conflict count together.
    pub fn set_coloring(&mut self, colors: Vec<usize>, conflicts: usize) {
        self.colors = colors;
        self.conflicts = conflicts;
    }

    /// Orders by conflict count only.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.conflicts.cmp(&other.conflicts)
    }

    /// Single-point crossover with `other`, producing exactly two children.
    ///
    /// A cut index `c` is drawn uniformly from `[1, len - 1]`. The first child
    /// takes `self[..c]` followed by `other[c..]`; the second takes
    /// `other[..c]` followed by `self[c..]`. Each child's conflict count comes
    /// from `fitness`, so the chromosome never needs a reference to the graph.
    ///
    /// With fewer than two genes there is no interior cut; the children are
    /// copies of `self` and `other`.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn breed_with<R, F>(&self, other: &Chromosome, rng: &mut R, fitness: F) -> [Chromosome; 2]
    where
        R: Rng,
        F: Fn(&[usize]) -> usize,
    {
        let (a, b) = single_point_crossover(&self.colors, &other.colors, rng);
        let fa = fitness(&a);
        let fb = fitness(&b);
        [Chromosome::new(a, fa), Chromosome::new(b, fb)]
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coloring: ")?;
        if self.colors.is_empty() {
            return write!(f, "none");
        }
        write!(
            f,
            "{}, bad edges count: {}",
            join_colors(&self.colors),
            self.conflicts
        )
    }
}

/// Renders a coloring as `c1-c2-...-cn`.
pub(crate) fn join_colors(colors: &[usize]) -> String {
    colors
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
