use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use graphkit_core::TextSource;

/// Build graphs from `reader` until only whitespace is left.
pub fn load_all<R, T, F>(reader: R, mut build: F) -> anyhow::Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(&mut TextSource<R>) -> graphkit_core::Result<T>,
{
    let mut source = TextSource::new(reader);
    let mut graphs = Vec::new();
    while !source.is_exhausted()? {
        let graph = build(&mut source)
            .with_context(|| format!("graph #{} (near line {})", graphs.len() + 1, source.line()))?;
        graphs.push(graph);
    }
    Ok(graphs)
}

/// Open `path` and build every graph description in it.
pub fn load_file<T, F>(path: &Path, build: F) -> anyhow::Result<Vec<T>>
where
    F: FnMut(&mut TextSource<BufReader<File>>) -> graphkit_core::Result<T>,
{
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let graphs = load_all(BufReader::new(file), build)
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), graphs = graphs.len(), "input loaded");
    Ok(graphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::{AdjacencyGraph, WeightedGraph};

    #[test]
    fn test_load_all_multiple() {
        let text = "2\nA\nB\n1 2 4\n0 0 0\n\n1\nC\n0 0 0\n\n";
        let graphs = load_all(text.as_bytes(), |src| WeightedGraph::build(src)).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].cost(1, 2), Some(4));
        assert_eq!(graphs[1].size(), 1);
    }

    #[test]
    fn test_load_all_empty() {
        let graphs = load_all("\n \n".as_bytes(), |src| AdjacencyGraph::build(src)).unwrap();
        assert!(graphs.is_empty());
    }

    #[test]
    fn test_load_all_reports_graph_number() {
        let text = "1\nA\n0 0\n2\nA\nB\n1 9\n0 0\n";
        let err = load_all(text.as_bytes(), |src| AdjacencyGraph::build(src)).unwrap_err();
        assert!(format!("{err:#}").contains("graph #2"));
    }

    #[test]
    fn test_sample_data_files() {
        let weighted = include_str!("../../../data/weighted.txt");
        let mut graphs = load_all(weighted.as_bytes(), |src| WeightedGraph::build(src)).unwrap();
        assert_eq!(graphs.len(), 2);
        let route = graphs[0].display(1, 4).unwrap().route.unwrap();
        assert_eq!(route.distance, 40);
        let ids: Vec<usize> = route.vertices.iter().map(|v| v.get()).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);

        let adjacency = include_str!("../../../data/adjacency.txt");
        let mut graphs = load_all(adjacency.as_bytes(), |src| AdjacencyGraph::build(src)).unwrap();
        let orders: Vec<Vec<usize>> = graphs
            .iter_mut()
            .map(|g| g.depth_first_search().into_iter().map(|v| v.get()).collect())
            .collect();
        assert_eq!(orders, vec![vec![1, 5, 4, 2, 3], vec![1, 2, 3, 4]]);
    }
}
