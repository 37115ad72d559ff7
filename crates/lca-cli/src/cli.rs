//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use lca_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lca-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Environmental impact lookup for virgin and recycled metals")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the known materials and their per-kg figures
    Materials,

    /// Analyze a quantity of one material
    Analyze {
        /// Material identifier (e.g. "aluminum_recycled")
        material: String,

        /// Quantity in kg
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Compare virgin and recycled sourcing of a metal
    Compare {
        /// Metal name (e.g. "steel") or a material identifier
        metal: String,

        /// Quantity in kg
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Analyze every row of a CSV file (columns: material, quantity)
    Batch {
        /// Path to CSV file
        csv: PathBuf,

        /// Number of parallel analyses. 0 = auto (CPU count). Uses 4 if not specified.
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
    },

    /// Interactive session reading "<material> <quantity>" lines from stdin
    Session,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set number of history entries shown
        #[arg(long)]
        set_history_limit: Option<usize>,

        /// Set default log filter (e.g. "warn", "lca_app=debug")
        #[arg(long)]
        set_log_filter: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
