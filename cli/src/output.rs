use std::fmt::Write as _;

use graphkit_core::{NodeSummary, PathReport, SourceReport, VertexId};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

fn join_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All-pairs table: a header, then per source its label followed by one row
/// per destination (`----` when unreachable).
pub fn render_all_paths(reports: &[SourceReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26}{:<11}{:<9}{:<12}Path",
        "Description", "From node", "To node", "Dijkstra's"
    );
    for report in reports {
        let _ = writeln!(out, "{}", report.label);
        for path in &report.paths {
            match &path.route {
                Some(route) => {
                    let _ = writeln!(
                        out,
                        "{:>35}{:>5}{:>14}    {}",
                        path.source,
                        path.dest,
                        route.distance,
                        join_ids(&route.vertices)
                    );
                }
                None => {
                    let _ = writeln!(out, "{:>35}{:>5}{:>14}", path.source, path.dest, "----");
                }
            }
        }
    }
    out
}

/// Detail for one pair: distance and vertex path, then each label on the path.
pub fn render_pair(report: &PathReport) -> String {
    let mut out = String::new();
    match &report.route {
        Some(route) => {
            let _ = writeln!(
                out,
                "{:>4}{:>8}{:>8}        {}",
                report.source,
                report.dest,
                route.distance,
                join_ids(&route.vertices)
            );
            for label in &route.labels {
                let _ = writeln!(out, "{label}");
            }
        }
        None => {
            let _ = writeln!(out, "No path from {} to {}.", report.source, report.dest);
        }
    }
    out
}

/// Node and edge listing in stored edge order.
pub fn render_graph(nodes: &[NodeSummary]) -> String {
    let mut out = String::from("Graph:\n");
    for node in nodes {
        let _ = writeln!(out, "Node #{}\t\t{}\n", node.id, node.label);
        for adjacent in &node.edges {
            let _ = writeln!(out, "  Edge  {}  {}", node.id, adjacent);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::{AdjacencyGraph, TextSource, WeightedGraph};

    fn triangle() -> WeightedGraph {
        let text = "3\nOne\nTwo\nThree\n1 2 1\n2 3 1\n1 3 5\n0 0 0\n";
        WeightedGraph::build(&mut TextSource::new(text.as_bytes())).unwrap()
    }

    #[test]
    fn test_render_all_paths() {
        let mut g = triangle();
        let text = render_all_paths(&g.display_all());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Description"));
        assert!(lines[0].ends_with("Path"));
        assert_eq!(lines[1], "One");
        assert!(lines[3].trim_start().starts_with("1    3"));
        assert!(lines[3].ends_with("    1 2 3"));
        // Source 3 has no outgoing edges.
        assert!(lines[lines.len() - 1].ends_with("----"));
        assert_eq!(lines.len(), 1 + 3 * 3);
    }

    #[test]
    fn test_render_pair() {
        let mut g = triangle();
        let text = render_pair(&g.display(1, 3).unwrap());
        assert_eq!(
            text,
            format!("{:>4}{:>8}{:>8}        1 2 3\nOne\nTwo\nThree\n", 1, 3, 2)
        );
        assert_eq!(render_pair(&g.display(3, 1).unwrap()), "No path from 3 to 1.\n");
    }

    #[test]
    fn test_render_graph() {
        let text = "2\nA\nB\n1 2\n1 1\n0 0\n";
        let g = AdjacencyGraph::build(&mut TextSource::new(text.as_bytes())).unwrap();
        let rendered = render_graph(&g.display_graph());
        assert_eq!(
            rendered,
            "Graph:\nNode #1\t\tA\n\n  Edge  1  1\n  Edge  1  2\n\nNode #2\t\tB\n\n\n"
        );
    }
}
