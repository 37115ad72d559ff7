//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.
//!
//! - `analysis_service`: owns the impact table and the history, runs analyses
//! - `batch_service`: runs many analyses on worker threads

pub mod analysis_service;
pub mod batch_service;

pub use analysis_service::{parse_quantity, AnalysisService};
pub use batch_service::{run_batch, BatchOutcome, BatchSummary};
