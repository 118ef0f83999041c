//! Error types.
//!
//! Only two things can fail in this crate: building a solver from an
//! invalid [`SolverConfig`](crate::ga::SolverConfig), and loading a graph
//! definition. Everything inside the evolutionary loop is total.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected solver configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("min_population_size must be at least 1")]
    PopulationTooSmall,

    #[error("population range is empty: max_population_size ({max}) must exceed min_population_size ({min})")]
    EmptyPopulationRange { min: usize, max: usize },

    #[error("max_colors must be at least 1")]
    NoColors,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("report_frequency must be at least 1")]
    ZeroReportFrequency,
}

/// Failure while reading a graph definition.
///
/// Parse variants carry the 1-based line number of the offending line.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("graph definition is empty: expected a '<vertices> <colors>' header line")]
    MissingHeader,

    #[error("invalid header at line {line}: expected '<vertices> <colors>', got '{content}'")]
    InvalidHeader { line: usize, content: String },

    #[error("header at line {line} declares zero {what}")]
    ZeroCount { line: usize, what: &'static str },

    #[error("invalid edge at line {line}: expected '<from>-<to>', got '{content}'")]
    InvalidEdge { line: usize, content: String },

    #[error("vertex {vertex} at line {line} out of range [1, {vertex_count}]")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

impl LoadError {
    /// Line number the error points at, if it is a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::InvalidHeader { line, .. }
            | LoadError::ZeroCount { line, .. }
            | LoadError::InvalidEdge { line, .. }
            | LoadError::VertexOutOfRange { line, .. } => Some(*line),
            LoadError::Io { .. } | LoadError::MissingHeader => None,
        }
    }
}
