use tracing::debug;

use crate::error::Result;
use crate::graph::VertexId;
use crate::list::AdjacencyGraph;

impl AdjacencyGraph {
    /// Depth-first search over every vertex, streaming each one to `visit`
    /// as it is reached.
    ///
    /// Roots are tried in ascending id order; edges are followed in stored
    /// (newest-first) order. Visited flags are never reset, so a second call
    /// on the same graph visits nothing.
    pub fn depth_first_search_with<F: FnMut(VertexId)>(&mut self, mut visit: F) {
        let mut count = 0usize;
        for v in VertexId::range(self.size()) {
            if !self.nodes[v.index()].visited {
                self.walk(v, &mut |u| {
                    count += 1;
                    visit(u);
                });
            }
        }
        debug!(visited = count, "depth-first search complete");
    }

    /// Depth-first ordering of every not-yet-visited vertex.
    pub fn depth_first_search(&mut self) -> Vec<VertexId> {
        let mut order = Vec::with_capacity(self.size());
        self.depth_first_search_with(|v| order.push(v));
        order
    }

    /// Traverse from one vertex, marking and emitting everything it reaches.
    ///
    /// Does nothing if `start` was already visited.
    pub fn traverse_from<F: FnMut(VertexId)>(&mut self, start: usize, mut visit: F) -> Result<()> {
        let start = VertexId::checked(start as i64, self.size())?;
        if !self.nodes[start.index()].visited {
            self.walk(start, &mut visit);
        }
        Ok(())
    }

    /// Pre-order walk with an explicit stack of (vertex, next edge) cursors.
    /// Emits in exactly the order the recursive formulation would.
    fn walk(&mut self, start: VertexId, visit: &mut dyn FnMut(VertexId)) {
        self.nodes[start.index()].visited = true;
        visit(start);

        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        while let Some(&(v, cursor)) = stack.last() {
            let next = self.nodes[v.index()]
                .edges
                .get(cursor)
                .map(|e| e.adjacent);

            let Some(w) = next else {
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            if !self.nodes[w.index()].visited {
                self.nodes[w.index()].visited = true;
                visit(w);
                stack.push((w, 0));
            }
        }
    }
}
