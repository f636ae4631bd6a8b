use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graphkit_core::MAX_VERTICES;

/// graphkit - shortest paths and depth-first order for small directed graphs
#[derive(Debug, Parser)]
#[command(name = "graphkit", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Largest vertex count a graph description may declare.
    #[arg(long, global = true, default_value_t = MAX_VERTICES)]
    pub max_vertices: usize,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load weighted graphs and print all-pairs shortest paths.
    Paths {
        /// File holding one or more `count / labels / source dest cost / 0 0 0` descriptions.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Also print the detailed path for SOURCE:DEST (repeatable).
        #[arg(short, long = "pair", value_name = "SOURCE:DEST", value_parser = parse_pair)]
        pairs: Vec<(usize, usize)>,
    },

    /// Load adjacency graphs and print their edges and depth-first order.
    Dfs {
        /// File holding one or more `count / labels / source dest / 0 0` descriptions.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

/// Parse `S:D` into a vertex pair.
pub fn parse_pair(s: &str) -> Result<(usize, usize), String> {
    let (source, dest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SOURCE:DEST, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid vertex '{part}' in '{s}'"))
    };
    Ok((parse(source)?, parse(dest)?))
}
