use std::path::Path;

use graphkit_core::{AdjacencyGraph, GraphConfig, NodeSummary, VertexId};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_file,
    output::{print_output, render_graph},
};

#[derive(Debug, Serialize)]
pub struct GraphTraversal {
    pub graph: usize,
    pub nodes: Vec<NodeSummary>,
    pub order: Vec<VertexId>,
}

pub fn run(path: &Path, config: &GraphConfig, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graphs = load_file(path, |src| AdjacencyGraph::build_with_config(src, config))?;

    if opts.json {
        let results: Vec<GraphTraversal> = graphs
            .into_iter()
            .enumerate()
            .map(|(i, mut graph)| GraphTraversal {
                graph: i + 1,
                nodes: graph.display_graph(),
                order: graph.depth_first_search(),
            })
            .collect();
        return print_output(&results, opts, |_| {});
    }

    // Text mode prints the ordering as the search reaches each vertex.
    for mut graph in graphs {
        print!("{}", render_graph(&graph.display_graph()));
        print!("Depth-First Search Ordering:");
        graph.depth_first_search_with(|v| print!("  {v}"));
        println!();
        println!();
    }
    Ok(())
}
