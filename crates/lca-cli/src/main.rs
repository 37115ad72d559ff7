//! LCA Checker - environmental impact lookup for metals
//!
//! A CLI tool that scales per-kilogram impact figures of virgin and recycled
//! metals, scores them, and compares sourcing scenarios.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use lca_app::config::Config;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: u8, config_filter: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = Config::load();
    let log_filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_logging(cli.verbose, &log_filter);

    if let Err(e) = config.and_then(|config| commands::execute(cli, config)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
