use std::path::Path;

use graphkit_core::{GraphConfig, PathReport, SourceReport, WeightedGraph};
use serde::Serialize;
use tracing::warn;

use crate::{
    app::GlobalOptions,
    commands::common::load_file,
    output::{print_output, render_all_paths, render_pair},
};

#[derive(Debug, Serialize)]
pub struct GraphPaths {
    pub graph: usize,
    pub all_paths: Vec<SourceReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<PathReport>,
}

/// All-pairs table plus any requested pairs that exist in this graph.
pub fn collect(graph: &mut WeightedGraph, number: usize, pairs: &[(usize, usize)]) -> GraphPaths {
    let all_paths = graph.display_all();
    let pairs = pairs
        .iter()
        .filter_map(|&(source, dest)| match graph.display(source, dest) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(graph = number, source, dest, "skipping pair: {}", e);
                None
            }
        })
        .collect();
    GraphPaths {
        graph: number,
        all_paths,
        pairs,
    }
}

pub fn run(
    path: &Path,
    pairs: &[(usize, usize)],
    config: &GraphConfig,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graphs = load_file(path, |src| WeightedGraph::build_with_config(src, config))?;

    let results: Vec<GraphPaths> = graphs
        .into_iter()
        .enumerate()
        .map(|(i, mut graph)| collect(&mut graph, i + 1, pairs))
        .collect();

    print_output(&results, opts, |results| {
        for result in results {
            print!("{}", render_all_paths(&result.all_paths));
            println!();
            for pair in &result.pairs {
                print!("{}", render_pair(pair));
                println!();
            }
        }
    })
}
