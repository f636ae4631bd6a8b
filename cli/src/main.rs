mod app;
mod commands;
mod output;

use clap::Parser;
use graphkit_core::GraphConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; --verbose enables debug; RUST_LOG overrides
    let default_filter = if cli.global.verbose {
        "graphkit_core=debug,graphkit=debug"
    } else {
        "graphkit_core=warn,graphkit=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GraphConfig::new().with_max_vertices(cli.global.max_vertices);
    config.validate()?;

    match &cli.command {
        Command::Paths { path, pairs } => commands::paths::run(path, pairs, &config, &cli.global),
        Command::Dfs { path } => commands::dfs::run(path, &config, &cli.global),
    }
}
