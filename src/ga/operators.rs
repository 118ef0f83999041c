//! Genetic operators for coloring chromosomes.
//!
//! These operate on plain `&[usize]` colorings (color `1..=max_colors` per
//! vertex) so they can be tested without a solver.
//!
//! # Operators
//!
//! - [`random_coloring`]: independent uniform color per vertex
//! - [`single_point_crossover`]: one cut, two complementary children
//! - [`conflict_mutation`]: recolor every vertex that clashes with a
//!   neighbor, preferring colors no neighbor uses
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems* (one-point crossover)
//! - Hindi & Yampolskiy (2012), "Genetic Algorithm Applied to the Graph Coloring Problem"

use crate::graph::Graph;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// A coloring of `vertex_count` vertices with each color drawn uniformly
/// from `1..=max_colors`.
///
/// # Panics
/// Panics if `max_colors` is zero and `vertex_count` is not.
pub fn random_coloring<R: Rng>(vertex_count: usize, max_colors: usize, rng: &mut R) -> Vec<usize> {
    (0..vertex_count)
        .map(|_| rng.random_range(1..=max_colors))
        .collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut `c` uniformly from `[1, n - 1]` and returns
/// `(parent1[..c] ++ parent2[c..], parent2[..c] ++ parent1[c..])`.
/// For `n < 2` the parents are returned unchanged.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    splice_at(parent1, parent2, cut)
}

/// Both single-point children for a fixed cut index.
///
/// # Panics
/// Panics if `cut > len` or the parents have different lengths.
pub fn splice_at(parent1: &[usize], parent2: &[usize], cut: usize) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let child1 = [&parent1[..cut], &parent2[cut..]].concat();
    let child2 = [&parent2[..cut], &parent1[cut..]].concat();
    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Conflict-directed mutation, in place.
///
/// Walks the vertices in order. A vertex whose color matches at least one
/// neighbor's color is recolored with a uniform pick among the colors no
/// neighbor currently uses; if the neighbors use every color, the pick is
/// uniform over all colors. Earlier recolorings are visible to later
/// vertices in the same pass.
///
/// Does not touch conflict counts: the caller recomputes the full count
/// afterwards.
///
/// # Complexity
/// O(n · (deg + k)) for `k` colors
pub fn conflict_mutation<R: Rng>(colors: &mut [usize], graph: &Graph, max_colors: usize, rng: &mut R) {
    debug_assert_eq!(colors.len(), graph.vertex_count());

    // used[c] == stamp  <=>  some neighbor of the current vertex has color c
    let mut used = vec![0usize; max_colors + 1];
    let mut free = Vec::with_capacity(max_colors);

    for i in 0..colors.len() {
        let stamp = i + 1;
        for &n in graph.neighbors(stamp) {
            used[colors[n - 1]] = stamp;
        }

        let current = colors[i];
        if used[current] != stamp {
            continue;
        }

        free.clear();
        free.extend((1..=max_colors).filter(|&c| used[c] != stamp));

        colors[i] = if free.is_empty() {
            rng.random_range(1..=max_colors)
        } else {
            free[rng.random_range(0..free.len())]
        };
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn triangle() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(1, 3, 1);
        g
    }

    fn ring(n: usize) -> Graph {
        let mut g = Graph::new(n);
        for v in 1..=n {
            g.add_edge(v, v % n + 1, 1);
        }
        g
    }

    // ---- Random coloring ----

    #[test]
    fn test_random_coloring_bounds() {
        let mut rng = create_rng(42);
        let colors = random_coloring(500, 4, &mut rng);
        assert_eq!(colors.len(), 500);
        assert!(colors.iter().all(|&c| (1..=4).contains(&c)));
        // all four colors show up in 500 draws
        for c in 1..=4 {
            assert!(colors.contains(&c), "color {c} never drawn");
        }
    }

    // ---- Crossover ----

    #[test]
    fn test_splice_at_fixed_cut() {
        let (a, b) = splice_at(&[1, 1, 1, 1], &[2, 2, 2, 2], 1);
        assert_eq!(a, vec![1, 2, 2, 2]);
        assert_eq!(b, vec![2, 1, 1, 1]);

        let (a, b) = splice_at(&[1, 2, 3], &[4, 5, 6], 2);
        assert_eq!(a, vec![1, 2, 6]);
        assert_eq!(b, vec![4, 5, 3]);
    }

    #[test]
    fn test_crossover_cut_never_at_ends() {
        // with distinct parents, a cut at 0 or n would reproduce a parent
        let mut rng = create_rng(3);
        let p1 = vec![1; 6];
        let p2 = vec![2; 6];
        for _ in 0..200 {
            let (a, b) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(a[0], 1);
            assert_eq!(a[5], 2);
            assert_eq!(b[0], 2);
            assert_eq!(b[5], 1);
        }
    }

    #[test]
    fn test_crossover_two_genes_always_cuts_middle() {
        let mut rng = create_rng(9);
        for _ in 0..20 {
            let (a, b) = single_point_crossover(&[1, 2], &[3, 4], &mut rng);
            assert_eq!(a, vec![1, 4]);
            assert_eq!(b, vec![3, 2]);
        }
    }

    #[test]
    fn test_crossover_short_parents() {
        let mut rng = create_rng(0);
        assert_eq!(
            single_point_crossover(&[], &[], &mut rng),
            (vec![], vec![])
        );
        assert_eq!(
            single_point_crossover(&[2], &[3], &mut rng),
            (vec![2], vec![3])
        );
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(0);
        single_point_crossover(&[1, 2], &[1], &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_leaves_valid_coloring_alone() {
        let g = ring(4);
        let mut rng = create_rng(42);
        let mut colors = vec![1, 2, 1, 2];
        conflict_mutation(&mut colors, &g, 2, &mut rng);
        assert_eq!(colors, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_mutation_picks_free_color() {
        // star: center 1, leaves 2..4 colored 1 and 2; only color 3 is free
        let mut g = Graph::new(4);
        g.add_edge(1, 2, 1);
        g.add_edge(1, 3, 1);
        g.add_edge(1, 4, 1);
        let mut rng = create_rng(5);
        for _ in 0..20 {
            let mut colors = vec![1, 1, 2, 2];
            conflict_mutation(&mut colors, &g, 3, &mut rng);
            assert_eq!(colors[0], 3, "center must move to the only free color");
            // after the center moved, leaves no longer clash
            assert_eq!(&colors[1..], &[1, 2, 2]);
        }
    }

    #[test]
    fn test_mutation_falls_back_when_no_free_color() {
        // triangle with two colors: vertex 1 sees both colors on its neighbors
        let g = triangle();
        let mut rng = create_rng(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let mut colors = vec![1, 1, 2];
            conflict_mutation(&mut colors, &g, 2, &mut rng);
            seen[colors[0]] = true;
            assert!(colors.iter().all(|&c| (1..=2).contains(&c)));
        }
        assert!(seen[1] && seen[2], "fallback should draw from all colors");
    }

    #[test]
    fn test_mutation_sees_earlier_updates() {
        // path 1-2: both colored 1 with 2 colors. Vertex 1 must move to 2,
        // then vertex 2 (now clashing with nothing) keeps color 1.
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 1);
        let mut rng = create_rng(0);
        let mut colors = vec![1, 1];
        conflict_mutation(&mut colors, &g, 2, &mut rng);
        assert_eq!(colors, vec![2, 1]);
    }

    #[test]
    fn test_mutation_self_loop_uses_fallback() {
        let mut g = Graph::new(1);
        g.add_edge(1, 1, 1);
        let mut rng = create_rng(2);
        let mut colors = vec![1];
        conflict_mutation(&mut colors, &g, 1, &mut rng);
        assert_eq!(colors, vec![1]);
    }

    proptest! {
        #[test]
        fn prop_mutation_preserves_length_and_range(
            n in 1usize..30,
            k in 1usize..6,
            edges in prop::collection::vec((0usize..1000, 0usize..1000), 0..80),
            seed in any::<u64>(),
        ) {
            let mut g = Graph::new(n);
            for (a, b) in edges {
                g.add_edge(a % n + 1, b % n + 1, 1);
            }
            let mut rng = create_rng(seed);
            let mut colors = random_coloring(n, k, &mut rng);
            conflict_mutation(&mut colors, &g, k, &mut rng);
            prop_assert_eq!(colors.len(), n);
            prop_assert!(colors.iter().all(|&c| (1..=k).contains(&c)));
        }
    }
}
