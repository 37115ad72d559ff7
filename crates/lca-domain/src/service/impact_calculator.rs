//! Impact calculation for a material and quantity

use lca_types::{Error, Result};

use crate::model::{AnalysisRecord, AnalysisResult, MaterialId, Metal, ScoreTier, Variant};
use crate::repository::{AnalysisHistoryRepository, ImpactTable};

/// Reject quantities that cannot describe an amount of material
pub fn validate_quantity(quantity: f64) -> Result<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "quantity must be a positive number of kg, got {}",
            quantity
        )))
    }
}

/// Compute the result bundle without touching any history
pub fn evaluate<T: ImpactTable + ?Sized>(
    table: &T,
    material_id: &str,
    quantity: f64,
) -> Result<AnalysisResult> {
    let record = table.lookup(material_id)?;
    let (virgin_score, recycled_score) = counterpart_scores(table, record.id.metal)?;
    validate_quantity(quantity)?;

    let impact = record.figures.scaled(quantity);
    let lifecycle = table.profile(record.id.variant).clone();
    let hotspot_stage = lifecycle.hotspot();

    Ok(AnalysisResult {
        material_id: record.id,
        material_name: record.display_name(),
        quantity,
        impact,
        overall_score: record.score,
        score_tier: ScoreTier::from_score(record.score),
        lifecycle,
        hotspot_stage,
        virgin_score,
        recycled_score,
    })
}

/// Evaluate and append the outcome to `history`
///
/// Nothing is appended unless every lookup succeeded.
pub fn analyze<T, H>(
    table: &T,
    history: &H,
    material_id: &str,
    quantity: f64,
) -> Result<AnalysisResult>
where
    T: ImpactTable + ?Sized,
    H: AnalysisHistoryRepository + ?Sized,
{
    let result = evaluate(table, material_id, quantity)?;
    history.append(AnalysisRecord::from_result(&result))?;
    Ok(result)
}

/// Scores of the virgin and recycled variants of `metal`
pub fn counterpart_scores<T: ImpactTable + ?Sized>(table: &T, metal: Metal) -> Result<(u8, u8)> {
    let score_of = |variant| {
        let id = MaterialId::new(metal, variant);
        table
            .get(id)
            .map(|r| r.score)
            .ok_or_else(|| Error::MaterialNotFound(id.to_string()))
    };
    Ok((score_of(Variant::Virgin)?, score_of(Variant::Recycled)?))
}
