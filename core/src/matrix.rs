//! Dense weighted digraph with an all-pairs shortest-path table.
//!
//! The path table is derived entirely from the cost matrix and is rebuilt in
//! full by every mutation and every path-reading query. There is no dirty flag.

use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{checked_size, Cost, NodeLabel, VertexId};
use crate::input::{read_header, TextSource};

/// Dijkstra state for one (source, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PathEntry {
    /// Destination has been settled.
    pub visited: bool,
    /// Shortest known distance. `None` = unreachable.
    pub dist: Option<Cost>,
    /// Vertex immediately before the destination. `None` when the destination is
    /// the source, is reached by a direct edge, or is unreachable.
    pub predecessor: Option<VertexId>,
}

/// A reachable shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub distance: Cost,
    /// Source through destination, inclusive.
    pub vertices: Vec<VertexId>,
    /// Labels of `vertices`, same order.
    pub labels: Vec<NodeLabel>,
}

/// Result of a single (source, destination) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub source: VertexId,
    pub dest: VertexId,
    /// `None` when there is no path.
    pub route: Option<Route>,
}

/// Every path out of one source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub source: VertexId,
    pub label: NodeLabel,
    /// One report per other vertex, ascending by destination.
    pub paths: Vec<PathReport>,
}

/// Weighted digraph stored as an N×N cost matrix.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    size: usize,
    labels: Vec<NodeLabel>,
    /// Row-major, `None` = no edge.
    costs: Vec<Option<Cost>>,
    /// Row-major, row = source.
    table: Vec<PathEntry>,
}

impl WeightedGraph {
    /// Graph with the given labels and no edges.
    pub fn with_labels<I>(labels: I, config: &GraphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = NodeLabel>,
    {
        config.validate()?;
        let labels: Vec<NodeLabel> = labels.into_iter().collect();
        let size = checked_size(labels.len() as i64, config.max_vertices)?;
        Ok(Self {
            size,
            labels,
            costs: vec![None; size * size],
            table: vec![PathEntry::default(); size * size],
        })
    }

    /// Load one description using the default configuration.
    pub fn build<R: BufRead>(source: &mut TextSource<R>) -> Result<Self> {
        Self::build_with_config(source, &GraphConfig::default())
    }

    /// Load one description: count, labels, then `source dest cost` records up
    /// to a `0 0 0` terminator or end of stream. Shortest paths are not computed.
    pub fn build_with_config<R: BufRead>(
        source: &mut TextSource<R>,
        config: &GraphConfig,
    ) -> Result<Self> {
        let labels = read_header(source, config)?;
        let mut graph = Self::with_labels(labels, config)?;

        let mut edges = 0usize;
        while let Some([from, to, cost]) = source.next_record::<3>()? {
            if from == 0 && to == 0 && cost == 0 {
                break;
            }
            let from = VertexId::checked(from, graph.size)?;
            let to = VertexId::checked(to, graph.size)?;
            if cost < 0 {
                return Err(GraphError::NegativeCost {
                    from: from.get(),
                    to: to.get(),
                    cost,
                });
            }
            let slot = graph.slot(from, to);
            graph.costs[slot] = Some(cost);
            edges += 1;
        }

        debug!(vertices = graph.size, edges, "weighted graph loaded");
        Ok(graph)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn label(&self, v: VertexId) -> Option<&NodeLabel> {
        self.labels.get(v.index())
    }

    /// Direct edge cost, `None` when there is no edge or an index is out of range.
    pub fn cost(&self, source: usize, dest: usize) -> Option<Cost> {
        let (s, d) = self.pair(source, dest)?;
        self.costs[self.slot(s, d)]
    }

    /// Stored path-table entry. Does not recompute.
    pub fn entry(&self, source: usize, dest: usize) -> Option<&PathEntry> {
        let (s, d) = self.pair(source, dest)?;
        Some(&self.table[self.slot(s, d)])
    }

    /// Set `source -> dest` to `cost` and recompute all shortest paths.
    ///
    /// Rejected (returns false, nothing changes) for a negative cost, a non-zero
    /// self-loop, or an index outside `[1, size]`.
    pub fn insert_edge(&mut self, source: usize, dest: usize, cost: Cost) -> bool {
        if cost < 0 || (cost != 0 && source == dest) {
            debug!(source, dest, cost, "insert_edge rejected");
            return false;
        }
        let Some((s, d)) = self.pair(source, dest) else {
            debug!(source, dest, size = self.size, "insert_edge out of range");
            return false;
        };

        let slot = self.slot(s, d);
        self.costs[slot] = Some(cost);
        self.find_shortest_path();
        true
    }

    /// Remove `source -> dest` and recompute. Removing a missing edge still recomputes.
    pub fn remove_edge(&mut self, source: usize, dest: usize) -> bool {
        let Some((s, d)) = self.pair(source, dest) else {
            debug!(source, dest, size = self.size, "remove_edge out of range");
            return false;
        };

        let slot = self.slot(s, d);
        self.costs[slot] = None;
        self.find_shortest_path();
        true
    }

    /// Rebuild the path table with Dijkstra's algorithm from every source.
    pub fn find_shortest_path(&mut self) {
        trace!(vertices = self.size, "recomputing shortest paths");
        for source in VertexId::range(self.size) {
            self.dijkstra_from(source);
        }
    }

    fn dijkstra_from(&mut self, source: VertexId) {
        let n = self.size;
        let row = source.index() * n;

        for entry in &mut self.table[row..row + n] {
            *entry = PathEntry::default();
        }
        self.table[row + source.index()].dist = Some(0);

        for _ in 0..n {
            let Some(v) = self.nearest_unvisited(source) else {
                // Everything left is unreachable.
                break;
            };
            self.table[row + v.index()].visited = true;
            self.relax_from(source, v);
        }
    }

    /// Lowest-distance unvisited vertex; ties go to the lowest index.
    fn nearest_unvisited(&self, source: VertexId) -> Option<VertexId> {
        let row = &self.table[source.index() * self.size..][..self.size];
        let mut best: Option<(VertexId, Cost)> = None;

        for v in VertexId::range(self.size) {
            let entry = &row[v.index()];
            if entry.visited {
                continue;
            }
            if let Some(dist) = entry.dist {
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((v, dist));
                }
            }
        }
        best.map(|(v, _)| v)
    }

    fn relax_from(&mut self, source: VertexId, v: VertexId) {
        let n = self.size;
        let row = source.index() * n;
        let Some(base) = self.table[row + v.index()].dist else {
            return;
        };

        for w in VertexId::range(n) {
            let Some(cost) = self.costs[self.slot(v, w)] else {
                continue;
            };
            let entry = &mut self.table[row + w.index()];
            if entry.visited {
                continue;
            }
            let candidate = base.saturating_add(cost);
            if entry.dist.map_or(true, |d| candidate < d) {
                entry.dist = Some(candidate);
                entry.predecessor = (v != source).then_some(v);
            }
        }
    }

    /// Recompute, then report the path from `source` to `dest`.
    pub fn display(&mut self, source: usize, dest: usize) -> Result<PathReport> {
        let (s, d) = self.checked_pair(source, dest)?;
        self.find_shortest_path();
        Ok(self.report(s, d))
    }

    /// Recompute, then report every path from every source.
    pub fn display_all(&mut self) -> Vec<SourceReport> {
        self.find_shortest_path();
        VertexId::range(self.size)
            .map(|s| SourceReport {
                source: s,
                label: self.labels[s.index()].clone(),
                paths: VertexId::range(self.size)
                    .filter(|&d| d != s)
                    .map(|d| self.report(s, d))
                    .collect(),
            })
            .collect()
    }

    /// Labels along the stored path from `source` to `dest`, source first.
    /// Empty when `dest` is unreachable.
    pub fn path_labels(&self, source: usize, dest: usize) -> Result<Vec<&NodeLabel>> {
        let (s, d) = self.checked_pair(source, dest)?;
        Ok(self
            .path_vertices(s, d)
            .into_iter()
            .map(|v| &self.labels[v.index()])
            .collect())
    }

    fn report(&self, source: VertexId, dest: VertexId) -> PathReport {
        let route = self.table[self.slot(source, dest)].dist.map(|distance| {
            let vertices = self.path_vertices(source, dest);
            let labels = vertices
                .iter()
                .map(|v| self.labels[v.index()].clone())
                .collect();
            Route {
                distance,
                vertices,
                labels,
            }
        });
        PathReport {
            source,
            dest,
            route,
        }
    }

    /// Walk predecessors back from `dest`, then emit source-first.
    fn path_vertices(&self, source: VertexId, dest: VertexId) -> Vec<VertexId> {
        if self.table[self.slot(source, dest)].dist.is_none() {
            return Vec::new();
        }

        let mut path = vec![dest];
        let mut current = dest;
        // A well-formed table never chains longer than `size`.
        while path.len() <= self.size {
            match self.table[self.slot(source, current)].predecessor {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        if dest != source {
            path.push(source);
        }
        path.reverse();
        path
    }

    fn slot(&self, source: VertexId, dest: VertexId) -> usize {
        source.index() * self.size + dest.index()
    }

    fn pair(&self, source: usize, dest: usize) -> Option<(VertexId, VertexId)> {
        let s = VertexId::new(source).filter(|v| v.get() <= self.size)?;
        let d = VertexId::new(dest).filter(|v| v.get() <= self.size)?;
        Some((s, d))
    }

    fn checked_pair(&self, source: usize, dest: usize) -> Result<(VertexId, VertexId)> {
        let check = |raw: usize| VertexId::checked(raw as i64, self.size);
        Ok((check(source)?, check(dest)?))
    }
}
