//! Domain services

pub mod history_report;
pub mod impact_calculator;
pub mod scenario;

pub use history_report::generate_history_report;
pub use impact_calculator::{analyze, counterpart_scores, evaluate, validate_quantity};
pub use scenario::compare_variants;
