//! CLI entry point for the site percolation experiments

use clap::Parser;
use percolation::io::cli::{Cli, Runner};
use percolation::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> percolation::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    Runner::new(cli).run()
}
