//! Graph construction configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{HARD_VERTEX_LIMIT, MAX_VERTICES};

/// Limits applied when a graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Largest vertex count a description may declare.
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the vertex capacity.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(GraphError::InvalidConfig(
                "max_vertices must be at least 1".to_string(),
            ));
        }
        if self.max_vertices > HARD_VERTEX_LIMIT {
            return Err(GraphError::InvalidConfig(format!(
                "max_vertices {} exceeds limit {}",
                self.max_vertices, HARD_VERTEX_LIMIT
            )));
        }
        Ok(())
    }
}
