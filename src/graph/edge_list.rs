//! Undirected weighted graph stored as an edge list.
//!
//! Vertices are numbered `1..=vertex_count`. Colorings index vertex `v` at
//! position `v - 1`.

use std::fmt;

/// An undirected edge. `(a, b)` and `(b, a)` denote the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Metadata only; the coloring objective ignores it.
    pub weight: u32,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// Returns `true` if this edge connects `a` and `b` in either direction.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// An undirected graph with at most one edge per unordered vertex pair.
///
/// The graph is the fitness oracle of the solver: [`conflict_count`]
/// is the only objective used anywhere in the search.
///
/// # Examples
///
/// ```
/// use gacolor::graph::Graph;
///
/// let mut g = Graph::new(3);
/// assert!(g.add_edge(1, 2, 5));
/// assert!(!g.add_edge(2, 1, 7)); // same edge, ignored
/// assert!(g.add_edge(2, 3, 1));
///
/// assert_eq!(g.neighbors(2), &[1, 3]);
/// assert_eq!(g.conflict_count(&[1, 1, 2]), 1);
/// ```
///
/// [`conflict_count`]: Graph::conflict_count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    // adjacency[v - 1], kept sorted
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Inserts an undirected edge.
    ///
    /// Returns `false` and leaves the graph untouched if `from` and `to` are
    /// already connected in either direction. A self-loop `(v, v)` is a valid
    /// edge; it makes `v` its own neighbor and is always a conflict.
    ///
    /// # Panics
    /// Panics if either endpoint is outside `1..=vertex_count`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) -> bool {
        self.check_vertex(from);
        self.check_vertex(to);

        if self.has_edge(from, to) {
            return false;
        }

        self.edges.push(Edge::new(from, to, weight));
        insert_sorted(&mut self.adjacency[from - 1], to);
        if from != to {
            insert_sorted(&mut self.adjacency[to - 1], from);
        }
        true
    }

    /// Returns `true` if an edge connects `from` and `to` in either direction.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from.wrapping_sub(1))
            .is_some_and(|adj| adj.binary_search(&to).is_ok())
    }

    /// Returns the edge between `from` and `to`, if any.
    pub fn edge(&self, from: usize, to: usize) -> Option<&Edge> {
        if !self.has_edge(from, to) {
            return None;
        }
        self.edges.iter().find(|e| e.connects(from, to))
    }

    /// Weight of the edge between `from` and `to`, if any.
    pub fn weight(&self, from: usize, to: usize) -> Option<u32> {
        self.edge(from, to).map(|e| e.weight)
    }

    /// Distinct vertices adjacent to `vertex`, in ascending order.
    ///
    /// # Panics
    /// Panics if `vertex` is outside `1..=vertex_count`.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.check_vertex(vertex);
        &self.adjacency[vertex - 1]
    }

    /// Counts edges whose two endpoints share a color.
    ///
    /// O(edges). Called once per created individual and once per mutation.
    ///
    /// # Panics
    /// Panics if `coloring` is shorter than `vertex_count`.
    pub fn conflict_count(&self, coloring: &[usize]) -> usize {
        self.edges
            .iter()
            .filter(|e| coloring[e.from - 1] == coloring[e.to - 1])
            .count()
    }

    fn check_vertex(&self, vertex: usize) {
        assert!(
            (1..=self.vertex_count).contains(&vertex),
            "vertex {vertex} out of range [1, {}]",
            self.vertex_count
        );
    }
}

fn insert_sorted(list: &mut Vec<usize>, value: usize) {
    if let Err(pos) = list.binary_search(&value) {
        list.insert(pos, value);
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges:",
            self.vertex_count,
            self.edges.len()
        )?;
        for e in &self.edges {
            writeln!(f, "{} - {}, weighted {}", e.from, e.to, e.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 2);
        g.add_edge(1, 3, 3);
        g
    }

    #[test]
    fn test_add_edge_rejects_duplicates_both_directions() {
        let mut g = Graph::new(4);
        assert!(g.add_edge(1, 2, 4));
        assert!(!g.add_edge(1, 2, 9));
        assert!(!g.add_edge(2, 1, 9));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(2, 1), Some(4));
    }

    #[test]
    fn test_neighbors_distinct_and_sorted() {
        let mut g = Graph::new(5);
        g.add_edge(3, 5, 1);
        g.add_edge(1, 3, 1);
        g.add_edge(3, 2, 1);
        g.add_edge(5, 3, 1); // duplicate
        assert_eq!(g.neighbors(3), &[1, 2, 5]);
        assert_eq!(g.neighbors(4), &[] as &[usize]);
    }

    #[test]
    fn test_self_loop() {
        let mut g = Graph::new(2);
        assert!(g.add_edge(2, 2, 1));
        assert!(!g.add_edge(2, 2, 1));
        assert_eq!(g.neighbors(2), &[2]);
        assert_eq!(g.conflict_count(&[1, 2]), 1);
    }

    #[test]
    fn test_conflict_count_triangle() {
        let g = triangle();
        assert_eq!(g.conflict_count(&[1, 1, 1]), 3);
        assert_eq!(g.conflict_count(&[1, 2, 1]), 1);
        assert_eq!(g.conflict_count(&[1, 2, 3]), 0);
    }

    #[test]
    fn test_conflict_count_ignores_weights() {
        let mut a = Graph::new(2);
        a.add_edge(1, 2, 1);
        let mut b = Graph::new(2);
        b.add_edge(1, 2, 100);
        assert_eq!(a.conflict_count(&[3, 3]), b.conflict_count(&[3, 3]));
    }

    #[test]
    fn test_edge_lookup() {
        let g = triangle();
        assert_eq!(g.edge(3, 2), Some(&Edge::new(2, 3, 2)));
        assert!(g.has_edge(3, 1));
        assert!(!g.has_edge(1, 1));
        assert_eq!(g.weight(1, 1), None);
        // out-of-range lookups are just "no edge"
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(9, 1));
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 7);
        assert_eq!(g.to_string(), "2 vertices, 1 edges:\n1 - 2, weighted 7\n");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_edge_out_of_range_panics() {
        let mut g = Graph::new(2);
        g.add_edge(1, 3, 1);
    }
}
