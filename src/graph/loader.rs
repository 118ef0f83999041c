//! Graph definition loader.
//!
//! ## Format
//!
//! ```text
//! 4 3
//! 1-2
//! 2-3
//! 3-4
//! 4-1
//! ```
//!
//! The first non-empty line holds the vertex count and the number of colors
//! available. Every following non-empty line is one edge `<from>-<to>` with
//! 1-based vertex IDs. Edge weights are not part of the file; they are drawn
//! from a generator seeded independently of the solver so that loading is
//! deterministic and does not disturb the search stream.

use super::edge_list::Graph;
use crate::error::LoadError;
use crate::random::create_rng;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Weight seed used when the caller has no preference.
pub const DEFAULT_WEIGHT_SEED: u64 = 0;

/// Range edge weights are drawn from.
const WEIGHT_RANGE: std::ops::Range<u32> = 1..10;

/// A parsed graph together with the color budget declared in its header.
#[derive(Debug, Clone)]
pub struct GraphDefinition {
    pub graph: Graph,
    pub color_count: usize,
}

/// Reads and parses a graph definition file.
pub fn load_graph<P: AsRef<Path>>(path: P, weight_seed: u64) -> Result<GraphDefinition, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let def = parse_graph(&text, weight_seed)?;
    log::debug!(
        "loaded '{}': {} vertices, {} edges, {} colors",
        path.display(),
        def.graph.vertex_count(),
        def.graph.edge_count(),
        def.color_count
    );
    Ok(def)
}

/// Parses a graph definition from text.
///
/// Duplicate edges (in either direction) are skipped.
pub fn parse_graph(text: &str, weight_seed: u64) -> Result<GraphDefinition, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let (vertex_count, color_count) = parse_header(header_line, header)?;

    let mut rng = create_rng(weight_seed);
    let mut graph = Graph::new(vertex_count);

    for (line_num, line) in lines {
        let (from, to) = parse_edge(line_num, line)?;
        for vertex in [from, to] {
            if vertex == 0 || vertex > vertex_count {
                return Err(LoadError::VertexOutOfRange {
                    line: line_num,
                    vertex,
                    vertex_count,
                });
            }
        }

        let weight = rng.random_range(WEIGHT_RANGE);
        if !graph.add_edge(from, to, weight) {
            log::debug!("skipping duplicate edge {from}-{to} at line {line_num}");
        }
    }

    Ok(GraphDefinition { graph, color_count })
}

fn parse_header(line: usize, content: &str) -> Result<(usize, usize), LoadError> {
    let invalid = || LoadError::InvalidHeader {
        line,
        content: content.to_string(),
    };

    let parts: Vec<&str> = content.split_whitespace().collect();
    let [vertices, colors] = parts.as_slice() else {
        return Err(invalid());
    };
    let vertices: usize = vertices.parse().map_err(|_| invalid())?;
    let colors: usize = colors.parse().map_err(|_| invalid())?;

    if vertices == 0 {
        return Err(LoadError::ZeroCount {
            line,
            what: "vertices",
        });
    }
    if colors == 0 {
        return Err(LoadError::ZeroCount {
            line,
            what: "colors",
        });
    }
    Ok((vertices, colors))
}

fn parse_edge(line: usize, content: &str) -> Result<(usize, usize), LoadError> {
    let invalid = || LoadError::InvalidEdge {
        line,
        content: content.to_string(),
    };

    let (from, to) = content.split_once('-').ok_or_else(invalid)?;
    let from: usize = from.trim().parse().map_err(|_| invalid())?;
    let to: usize = to.trim().parse().map_err(|_| invalid())?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let def = parse_graph("3 2\n1-2\n2-3\n", DEFAULT_WEIGHT_SEED).unwrap();
        assert_eq!(def.color_count, 2);
        assert_eq!(def.graph.vertex_count(), 3);
        assert_eq!(def.graph.edge_count(), 2);
        assert!(def.graph.has_edge(3, 2));
    }

    #[test]
    fn test_weights_in_range_and_seeded() {
        let text = "4 3\n1-2\n2-3\n3-4\n4-1\n";
        let a = parse_graph(text, 11).unwrap();
        let b = parse_graph(text, 11).unwrap();
        assert_eq!(a.graph, b.graph);
        for e in a.graph.edges() {
            assert!((1..10).contains(&e.weight), "weight {} out of range", e.weight);
        }
    }

    #[test]
    fn test_blank_lines_and_whitespace_tolerated() {
        let def = parse_graph("\n  3   3 \n\n 1 - 2 \n\n2-3\n\n", 0).unwrap();
        assert_eq!(def.graph.edge_count(), 2);
    }

    #[test]
    fn test_duplicate_edges_skipped() {
        let def = parse_graph("3 2\n1-2\n2-1\n1-2\n", 0).unwrap();
        assert_eq!(def.graph.edge_count(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_graph("   \n\n", 0),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn test_invalid_header() {
        let err = parse_graph("3\n1-2\n", 0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidHeader { line: 1, .. }));

        let err = parse_graph("three 2\n", 0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidHeader { .. }));

        let err = parse_graph("3 2 1\n", 0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidHeader { .. }));
    }

    #[test]
    fn test_zero_counts() {
        assert!(matches!(
            parse_graph("0 2\n", 0),
            Err(LoadError::ZeroCount { what: "vertices", .. })
        ));
        assert!(matches!(
            parse_graph("3 0\n", 0),
            Err(LoadError::ZeroCount { what: "colors", .. })
        ));
    }

    #[test]
    fn test_malformed_edge_reports_line() {
        let err = parse_graph("3 2\n1-2\n2 3\n", 0).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(matches!(err, LoadError::InvalidEdge { .. }));

        let err = parse_graph("3 2\n1-x\n", 0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidEdge { line: 2, .. }));
    }

    #[test]
    fn test_vertex_out_of_range() {
        let err = parse_graph("3 2\n1-4\n", 0).unwrap_err();
        assert!(matches!(
            err,
            LoadError::VertexOutOfRange {
                line: 2,
                vertex: 4,
                vertex_count: 3
            }
        ));
        let err = parse_graph("3 2\n0-1\n", 0).unwrap_err();
        assert!(matches!(err, LoadError::VertexOutOfRange { vertex: 0, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_graph("/nonexistent/graph.txt", 0).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/graph.txt"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("gacolor_loader_{}.txt", std::process::id()));
        fs::write(&path, "2 2\n1-2\n").unwrap();
        let def = load_graph(&path, 0).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(def.graph.edge_count(), 1);
    }
}
