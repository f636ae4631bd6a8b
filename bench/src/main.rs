use std::collections::VecDeque;
use std::fmt::Write as _;
use std::time::Instant;

use graphkit_core::{AdjacencyGraph, GraphConfig, TextSource, WeightedGraph, HARD_VERTEX_LIMIT};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    if mode == "help" || mode == "--help" {
        println!("Usage: graphkit-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run every generator against both graph types (default)");
        println!("  weighted    Dense matrix generators: all-pairs Dijkstra");
        println!("  adjacency   Sparse list generators: depth-first search");
        println!();
        println!("Default node_count: 100 (max {})", HARD_VERTEX_LIMIT);
        return;
    }

    if node_count < 12 || node_count > HARD_VERTEX_LIMIT as u64 {
        eprintln!(
            "node_count must be between 12 and {}, got {}",
            HARD_VERTEX_LIMIT, node_count
        );
        return;
    }

    let weighted: Vec<(&str, fn(u64) -> Description)> = vec![
        ("Random dense", gen_random_dense as fn(u64) -> Description),
        ("Weighted chain", gen_weighted_chain),
        ("Complete digraph", gen_complete),
        ("Barbell (clique-bridge-clique)", gen_barbell),
    ];
    let adjacency: Vec<(&str, fn(u64) -> Description)> = vec![
        ("Ternary tree", gen_tree as fn(u64) -> Description),
        ("Chain", gen_chain),
        ("Random sparse", gen_random_sparse),
        ("DLA (organic branching)", gen_dla),
    ];

    println!("graphkit-bench");
    println!("==============");
    println!();

    let config = GraphConfig::new().with_max_vertices(node_count as usize);

    match mode {
        "weighted" => weighted
            .into_iter()
            .for_each(|(name, g)| run_weighted(name, g, node_count, &config)),
        "adjacency" => adjacency
            .into_iter()
            .for_each(|(name, g)| run_adjacency(name, g, node_count, &config)),
        "all" => {
            for (name, g) in weighted {
                run_weighted(name, g, node_count, &config);
            }
            for (name, g) in adjacency {
                run_adjacency(name, g, node_count, &config);
            }
        }
        _ => eprintln!("Unknown mode: {}. Use --help for options.", mode),
    }
}

fn run_weighted(name: &str, generator: fn(u64) -> Description, node_count: u64, config: &GraphConfig) {
    println!("--- {} ---", name);
    let desc = generator(node_count);
    let text = desc.to_text(true);

    let t = Instant::now();
    let mut graph = match WeightedGraph::build_with_config(&mut TextSource::new(text.as_bytes()), config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("build failed: {}", e);
            return;
        }
    };
    println!(
        "Loaded in {:.2}ms — {} vertices, {} edges",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.size(),
        desc.edges.len()
    );

    let t = Instant::now();
    graph.find_shortest_path();
    println!("All-pairs Dijkstra: {:.2}ms", t.elapsed().as_secs_f64() * 1000.0);

    let t = Instant::now();
    let reports = graph.display_all();
    let elapsed = t.elapsed();
    let reachable = reports
        .iter()
        .flat_map(|r| r.paths.iter())
        .filter(|p| p.route.is_some())
        .count();
    let longest = reports
        .iter()
        .flat_map(|r| r.paths.iter())
        .filter_map(|p| p.route.as_ref())
        .map(|r| r.vertices.len() - 1)
        .max()
        .unwrap_or(0);
    println!(
        "display_all: {:.2}ms — {} reachable pairs, longest path {} hops",
        elapsed.as_secs_f64() * 1000.0,
        reachable,
        longest
    );

    // One mutation pays a full recompute.
    let t = Instant::now();
    graph.remove_edge(1, 2);
    println!("remove_edge + recompute: {:.2}ms", t.elapsed().as_secs_f64() * 1000.0);
    println!();
}

fn run_adjacency(name: &str, generator: fn(u64) -> Description, node_count: u64, config: &GraphConfig) {
    println!("--- {} ---", name);
    let desc = generator(node_count);
    let text = desc.to_text(false);

    let t = Instant::now();
    let mut graph = match AdjacencyGraph::build_with_config(&mut TextSource::new(text.as_bytes()), config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("build failed: {}", e);
            return;
        }
    };
    println!(
        "Loaded in {:.2}ms — {} vertices, {} edges",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.size(),
        graph.edge_count()
    );

    let t = Instant::now();
    let order = graph.depth_first_search();
    println!(
        "DFS: {:.3}ms — {} vertices ordered",
        t.elapsed().as_secs_f64() * 1000.0,
        order.len()
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators — deterministic, emitted as text and loaded through `build`
// ---------------------------------------------------------------------------

/// A generated graph: vertex count plus 1-based (from, to, cost) edges.
struct Description {
    vertices: u64,
    edges: Vec<(u64, u64, i64)>,
}

impl Description {
    fn new(vertices: u64) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    fn edge(&mut self, from: u64, to: u64, cost: i64) {
        self.edges.push((from, to, cost));
    }

    fn to_text(&self, weighted: bool) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.vertices);
        for i in 1..=self.vertices {
            let _ = writeln!(text, "Vertex {}", i);
        }
        for &(from, to, cost) in &self.edges {
            if weighted {
                let _ = writeln!(text, "{} {} {}", from, to, cost);
            } else {
                let _ = writeln!(text, "{} {}", from, to);
            }
        }
        text.push_str(if weighted { "0 0 0\n" } else { "0 0\n" });
        text
    }
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Each ordered pair gets an edge with probability 0.3, cost 1..=50.
fn gen_random_dense(n: u64) -> Description {
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(54321);
    for from in 1..=n {
        for to in 1..=n {
            if from != to && rng.next_f64() < 0.3 {
                desc.edge(from, to, 1 + rng.next(50) as i64);
            }
        }
    }
    desc
}

/// 1 → 2 → … → n. Longest possible shortest paths.
fn gen_weighted_chain(n: u64) -> Description {
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(42);
    for i in 1..n {
        desc.edge(i, i + 1, 1 + rng.next(10) as i64);
    }
    desc
}

/// Every ordered pair connected. Densest relaxation workload.
fn gen_complete(n: u64) -> Description {
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(12345);
    for from in 1..=n {
        for to in 1..=n {
            if from != to {
                desc.edge(from, to, 1 + rng.next(100) as i64);
            }
        }
    }
    desc
}

/// Two dense clusters joined by a chain of 10 bridge vertices.
fn gen_barbell(n: u64) -> Description {
    let bridge_len = 10u64;
    let clique = (n - bridge_len) / 2;
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(99999);

    let b_start = clique + bridge_len + 1;
    for offset in [1, b_start] {
        for i in 0..clique {
            for j in 0..clique {
                if i != j && rng.next(3) == 0 {
                    desc.edge(offset + i, offset + j, 1 + rng.next(20) as i64);
                }
            }
        }
    }

    // clique A tail -> bridge -> clique B head
    for id in clique..b_start {
        desc.edge(id, id + 1, 5);
    }
    desc
}

/// Each vertex spawns three children, breadth-first.
fn gen_tree(n: u64) -> Description {
    let mut desc = Description::new(n);
    for child in 2..=n {
        desc.edge((child - 2) / 3 + 1, child, 0);
    }
    desc
}

fn gen_chain(n: u64) -> Description {
    let mut desc = Description::new(n);
    for i in 1..n {
        desc.edge(i, i + 1, 0);
    }
    desc
}

/// About three random edges per vertex.
fn gen_random_sparse(n: u64) -> Description {
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(67890);
    for _ in 0..n * 3 {
        let from = 1 + rng.next(n);
        let to = 1 + rng.next(n);
        if from != to {
            desc.edge(from, to, 0);
        }
    }
    desc
}

/// Each new vertex attaches to a recent "surface" vertex, with occasional
/// long-range links back into the structure.
fn gen_dla(n: u64) -> Description {
    let mut desc = Description::new(n);
    let mut rng = FastRng::new(77777);

    let mut surface: VecDeque<u64> = VecDeque::with_capacity(65);
    surface.push_back(1);
    let surface_max = 64usize;

    for new_node in 2..=n {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        desc.edge(attach_to, new_node, 0);

        if rng.next(10) == 0 {
            let other = 1 + rng.next(new_node - 1);
            if other != attach_to {
                desc.edge(new_node, other, 0);
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }
    desc
}
