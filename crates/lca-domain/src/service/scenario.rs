//! Virgin vs. recycled what-if comparison

use lca_types::{Error, Result};

use crate::model::{MaterialId, MaterialRecord, Metal, ScenarioComparison, Variant};
use crate::repository::ImpactTable;

use super::impact_calculator::validate_quantity;

/// Compare both sourcing variants of `metal` at the same quantity
pub fn compare_variants<T: ImpactTable + ?Sized>(
    table: &T,
    metal: Metal,
    quantity: f64,
) -> Result<ScenarioComparison> {
    let virgin = record_for(table, metal, Variant::Virgin)?;
    let recycled = record_for(table, metal, Variant::Recycled)?;
    validate_quantity(quantity)?;

    Ok(ScenarioComparison::new(
        metal,
        quantity,
        virgin.figures.scaled(quantity),
        recycled.figures.scaled(quantity),
        virgin.score,
        recycled.score,
    ))
}

fn record_for<T: ImpactTable + ?Sized>(
    table: &T,
    metal: Metal,
    variant: Variant,
) -> Result<&MaterialRecord> {
    let id = MaterialId::new(metal, variant);
    table
        .get(id)
        .ok_or_else(|| Error::MaterialNotFound(id.to_string()))
}
