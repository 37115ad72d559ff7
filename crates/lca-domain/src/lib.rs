//! Domain layer for metal impact analysis
//!
//! - `model`: materials, lifecycle profiles, analysis results and history records
//! - `repository`: traits for the impact table and the analysis history
//! - `service`: impact calculation, scenario comparison, history reporting

pub mod model;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
