use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Edge weight. Signed so that rejected negative costs are representable at the API edge.
pub type Cost = i64;

/// Default vertex capacity of a graph.
pub const MAX_VERTICES: usize = 100;

/// Upper bound accepted for a configured capacity. Keeps the dense N×N tables bounded.
pub const HARD_VERTEX_LIMIT: usize = 4096;

/// 1-based vertex identifier.
///
/// Index 0 is never a vertex; "no vertex" is spelled `Option<VertexId>`, which
/// costs nothing extra thanks to the non-zero niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(NonZeroUsize);

impl VertexId {
    /// Returns `None` for 0.
    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(Self)
    }

    /// Validate a raw index against a graph of `size` vertices.
    pub fn checked(raw: i64, size: usize) -> Result<Self> {
        usize::try_from(raw)
            .ok()
            .filter(|&v| v <= size)
            .and_then(Self::new)
            .ok_or(GraphError::VertexOutOfRange { vertex: raw, size })
    }

    /// The 1-based id.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Zero-based slot in per-vertex storage.
    pub(crate) fn index(self) -> usize {
        self.0.get() - 1
    }

    /// All vertices of a graph with `size` vertices, ascending.
    pub(crate) fn range(size: usize) -> impl Iterator<Item = VertexId> {
        (1..=size).filter_map(Self::new)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Display text of a vertex, taken from one line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeLabel(String);

impl NodeLabel {
    /// Build a label from a raw input line. Only the line terminator is stripped.
    pub fn from_line(line: &str) -> Self {
        let text = line.strip_suffix('\n').unwrap_or(line);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeLabel {
    fn from(s: &str) -> Self {
        Self::from_line(s)
    }
}

impl From<String> for NodeLabel {
    fn from(s: String) -> Self {
        Self::from_line(&s)
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Check a declared vertex count against the capacity.
pub(crate) fn checked_size(count: i64, max: usize) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|&n| (1..=max).contains(&n))
        .ok_or(GraphError::InvalidVertexCount { count, max })
}
