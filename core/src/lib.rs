//! graphkit-core: two directed graph representations over a bounded vertex set.
//!
//! - [`WeightedGraph`] keeps a dense cost matrix and an all-pairs shortest-path
//!   table filled by Dijkstra's algorithm, with path reconstruction.
//! - [`AdjacencyGraph`] keeps per-vertex edge lists and runs depth-first search
//!   whose order follows edge declaration order, newest first.
//!
//! Both load from the same line-oriented text format (see [`TextSource`]).
//! Rendering is left to callers; queries return plain report values.

mod config;
mod error;
mod graph;
mod input;
mod list;
mod matrix;
mod traversal;

pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{Cost, NodeLabel, VertexId, HARD_VERTEX_LIMIT, MAX_VERTICES};
pub use input::TextSource;
pub use list::{AdjacencyGraph, EdgeRecord, NodeSummary};
pub use matrix::{PathEntry, PathReport, Route, SourceReport, WeightedGraph};
