//! Graph model and graph-definition loading.
//!
//! - [`Graph`]: undirected weighted edge list; answers adjacency and
//!   conflict-count queries
//! - [`load_graph`] / [`parse_graph`]: read the `<vertices> <colors>` +
//!   `<from>-<to>` text format

mod edge_list;
mod loader;

pub use edge_list::{Edge, Graph};
pub use loader::{load_graph, parse_graph, GraphDefinition, DEFAULT_WEIGHT_SEED};
