//! Sparse digraph stored as per-vertex edge lists.

use std::collections::VecDeque;
use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{NodeLabel, VertexId};
use crate::input::{read_header, TextSource};

/// A directed edge in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub adjacent: VertexId,
}

/// One vertex: its label, outgoing edges and traversal latch.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    pub(crate) label: NodeLabel,
    /// Newest edge first.
    pub(crate) edges: VecDeque<EdgeRecord>,
    /// Set once by a traversal, never cleared.
    pub(crate) visited: bool,
}

/// A vertex and its outgoing edges, in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub id: VertexId,
    pub label: NodeLabel,
    pub edges: Vec<VertexId>,
}

/// Digraph as adjacency lists. Edges are fixed once built.
///
/// Each edge is pushed onto the front of its source's list, so iteration
/// visits the most recently declared edge first. Depth-first traversal order
/// depends on this.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    pub(crate) nodes: Vec<GraphNode>,
}

impl AdjacencyGraph {
    fn with_labels(labels: Vec<NodeLabel>) -> Self {
        Self {
            nodes: labels
                .into_iter()
                .map(|label| GraphNode {
                    label,
                    edges: VecDeque::new(),
                    visited: false,
                })
                .collect(),
        }
    }

    /// Load one description using the default configuration.
    pub fn build<R: BufRead>(source: &mut TextSource<R>) -> Result<Self> {
        Self::build_with_config(source, &GraphConfig::default())
    }

    /// Load one description: count, labels, then `source dest` pairs up to a
    /// `0 0` terminator or end of stream.
    pub fn build_with_config<R: BufRead>(
        source: &mut TextSource<R>,
        config: &GraphConfig,
    ) -> Result<Self> {
        let mut graph = Self::with_labels(read_header(source, config)?);
        let size = graph.size();

        while let Some([from, to]) = source.next_record::<2>()? {
            if from == 0 && to == 0 {
                break;
            }
            let from = VertexId::checked(from, size)?;
            let adjacent = VertexId::checked(to, size)?;
            graph.nodes[from.index()]
                .edges
                .push_front(EdgeRecord { adjacent });
        }

        debug!(
            vertices = size,
            edges = graph.edge_count(),
            "adjacency graph loaded"
        );
        Ok(graph)
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn label(&self, v: VertexId) -> Option<&NodeLabel> {
        self.nodes.get(v.index()).map(|n| &n.label)
    }

    /// Outgoing edges of `v` in traversal order. Empty for an unknown vertex.
    pub fn edges(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes
            .get(v.index())
            .into_iter()
            .flat_map(|n| n.edges.iter().map(|e| e.adjacent))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.nodes.get(v.index()).is_some_and(|n| n.visited)
    }

    /// Every vertex with its label and edges, ascending by id.
    pub fn display_graph(&self) -> Vec<NodeSummary> {
        VertexId::range(self.size())
            .map(|id| NodeSummary {
                id,
                label: self.nodes[id.index()].label.clone(),
                edges: self.edges(id).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn load(text: &str) -> AdjacencyGraph {
        AdjacencyGraph::build(&mut TextSource::new(text.as_bytes())).unwrap()
    }

    fn v(id: usize) -> VertexId {
        VertexId::new(id).unwrap()
    }

    #[test]
    fn test_edges_are_lifo() {
        let g = load("3\nA\nB\nC\n1 2\n1 3\n2 3\n0 0\n");
        let from1: Vec<usize> = g.edges(v(1)).map(VertexId::get).collect();
        assert_eq!(from1, vec![3, 2]);
        assert_eq!(g.edges(v(3)).count(), 0);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_labels_and_summary() {
        let g = load("2\nFirst street\nSecond street\n2 1\n0 0\n");
        assert_eq!(g.size(), 2);
        assert_eq!(g.label(v(1)).unwrap().as_str(), "First street");
        assert!(g.label(v(3)).is_none());

        let summary = g.display_graph();
        assert_eq!(summary.len(), 2);
        assert!(summary[0].edges.is_empty());
        assert_eq!(summary[1].id, v(2));
        assert_eq!(summary[1].label.as_str(), "Second street");
        assert_eq!(summary[1].edges, vec![v(1)]);
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let g = load("2\nA\nB\n1 2\n1 2\n0 0\n");
        assert_eq!(g.edges(v(1)).count(), 2);
    }

    #[test]
    fn test_build_sequential_graphs() {
        let mut src = TextSource::new("1\nSolo\n0 0\n2\nA\nB\n1 2\n0 0\n".as_bytes());
        let first = AdjacencyGraph::build(&mut src).unwrap();
        let second = AdjacencyGraph::build(&mut src).unwrap();
        assert_eq!(first.size(), 1);
        assert_eq!(second.size(), 2);
        assert_eq!(second.edge_count(), 1);
        assert!(src.is_exhausted().unwrap());
    }

    #[test]
    fn test_build_rejects_out_of_range() {
        let mut src = TextSource::new("2\nA\nB\n2 5\n0 0\n".as_bytes());
        assert!(matches!(
            AdjacencyGraph::build(&mut src),
            Err(GraphError::VertexOutOfRange { vertex: 5, size: 2 })
        ));

        let mut src = TextSource::new("2\nA\nB\n0 1\n0 0\n".as_bytes());
        assert!(matches!(
            AdjacencyGraph::build(&mut src),
            Err(GraphError::VertexOutOfRange { vertex: 0, size: 2 })
        ));
    }

    #[test]
    fn test_build_bad_token() {
        let mut src = TextSource::new("2\nA\nB\n1 two\n0 0\n".as_bytes());
        assert!(matches!(
            AdjacencyGraph::build(&mut src),
            Err(GraphError::InvalidNumber { line: 4, .. })
        ));
    }

    #[test]
    fn test_fresh_graph_unvisited() {
        let g = load("2\nA\nB\n1 2\n0 0\n");
        assert!(!g.is_visited(v(1)));
        assert!(!g.is_visited(v(2)));
    }
}
