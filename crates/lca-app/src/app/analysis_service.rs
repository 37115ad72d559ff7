//! Analysis Service - composition root for impact analyses
//!
//! Owns the impact table and the history store. Every analysis goes through
//! here so the history is injected rather than shared as ambient state.

use lca_domain::model::{
    AnalysisRecord, AnalysisResult, HistoryStats, MaterialId, MaterialRecord, Metal,
    ScenarioComparison,
};
use lca_domain::repository::{AnalysisHistoryRepository, ImpactTable};
use lca_domain::service::{analyze, compare_variants, generate_history_report};
use lca_infra::StaticImpactTable;
use lca_store::HistoryStore;
use lca_types::{Error, Result};
use tracing::{debug, info, warn};

/// Parse a quantity typed by a user (kg)
///
/// Only checks that the text is a number; range checks happen in the analysis.
pub fn parse_quantity(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("quantity is not a number: '{}'", trimmed)))
}

/// Parse a metal name, also accepting a full material identifier
fn parse_metal(raw: &str) -> Result<Metal> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Metal>()
        .or_else(|_| trimmed.parse::<MaterialId>().map(|id| id.metal))
        .map_err(|_| Error::MaterialNotFound(trimmed.to_string()))
}

/// Impact analysis use cases over a table and a history
pub struct AnalysisService<T = StaticImpactTable, H = HistoryStore> {
    table: T,
    history: H,
}

impl AnalysisService<StaticImpactTable, HistoryStore> {
    /// Built-in table with an empty history
    pub fn new() -> Self {
        Self::with_parts(StaticImpactTable::new(), HistoryStore::new())
    }
}

impl Default for AnalysisService<StaticImpactTable, HistoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H> AnalysisService<T, H>
where
    T: ImpactTable,
    H: AnalysisHistoryRepository,
{
    pub fn with_parts(table: T, history: H) -> Self {
        Self { table, history }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn history_repo(&self) -> &H {
        &self.history
    }

    /// Analyze `quantity` kg of `material_id` and record it in the history
    pub fn analyze(&self, material_id: &str, quantity: f64) -> Result<AnalysisResult> {
        debug!(material_id, quantity, "analysis requested");

        match analyze(&self.table, &self.history, material_id, quantity) {
            Ok(result) => {
                info!(
                    material = %result.material_id,
                    quantity,
                    score = result.overall_score,
                    tier = %result.score_tier,
                    hotspot = %result.hotspot_stage,
                    "analysis complete"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(material_id, quantity, error = %e, "analysis rejected");
                Err(e)
            }
        }
    }

    /// Analyze raw form-style input (quantity still as text)
    pub fn analyze_input(&self, material_id: &str, quantity: &str) -> Result<AnalysisResult> {
        let quantity = parse_quantity(quantity)?;
        self.analyze(material_id.trim(), quantity)
    }

    /// What-if comparison of both variants of a metal; not recorded in history
    pub fn compare(&self, metal: &str, quantity: f64) -> Result<ScenarioComparison> {
        let metal = parse_metal(metal)?;
        let comparison = compare_variants(&self.table, metal, quantity)?;
        info!(
            %metal,
            quantity,
            score_improvement = comparison.score_improvement,
            "scenario compared"
        );
        Ok(comparison)
    }

    /// All known materials in table order
    pub fn materials(&self) -> Vec<&MaterialRecord> {
        self.table.materials()
    }

    /// History in call order
    pub fn history(&self) -> Result<Vec<AnalysisRecord>> {
        self.history.find_all()
    }

    pub fn stats(&self) -> Result<HistoryStats> {
        Ok(HistoryStats::from_records(&self.history.find_all()?))
    }

    /// Text report over the last `limit` analyses
    pub fn history_report(&self, limit: usize) -> Result<String> {
        let records = self.history.find_all()?;
        let skip = records.len().saturating_sub(limit);
        Ok(generate_history_report(&records[skip..]))
    }
}
