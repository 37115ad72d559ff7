//! Built-in impact table
//!
//! All figures are per kg. Scores are indicative demonstration values.

use lca_domain::model::{
    ImpactFigures, LifecycleProfile, MaterialId, MaterialRecord, Metal, Variant,
};
use lca_domain::repository::ImpactTable;

const RECORDS: [(Metal, Variant, ImpactFigures, u8); 18] = [
    (Metal::Aluminum, Variant::Virgin, ImpactFigures::new(15.0, 1.5, 15.0, 2.5), 45),
    (Metal::Aluminum, Variant::Recycled, ImpactFigures::new(1.5, 0.1, 1.0, 0.2), 92),
    (Metal::Copper, Variant::Virgin, ImpactFigures::new(3.5, 2.0, 4.0, 0.8), 60),
    (Metal::Copper, Variant::Recycled, ImpactFigures::new(0.8, 0.3, 0.8, 0.15), 85),
    (Metal::Steel, Variant::Virgin, ImpactFigures::new(2.5, 0.5, 0.5, 1.2), 75),
    (Metal::Steel, Variant::Recycled, ImpactFigures::new(0.5, 0.1, 0.2, 0.1), 90),
    (Metal::Zinc, Variant::Virgin, ImpactFigures::new(3.0, 1.0, 1.5, 0.6), 68),
    (Metal::Zinc, Variant::Recycled, ImpactFigures::new(0.7, 0.2, 0.5, 0.1), 88),
    (Metal::Nickel, Variant::Virgin, ImpactFigures::new(5.0, 2.5, 5.5, 1.0), 55),
    (Metal::Nickel, Variant::Recycled, ImpactFigures::new(1.2, 0.4, 1.5, 0.2), 83),
    (Metal::Tin, Variant::Virgin, ImpactFigures::new(4.0, 1.8, 3.5, 0.7), 62),
    (Metal::Tin, Variant::Recycled, ImpactFigures::new(1.0, 0.3, 0.9, 0.1), 87),
    (Metal::Lead, Variant::Virgin, ImpactFigures::new(4.5, 0.8, 0.9, 1.5), 58),
    (Metal::Lead, Variant::Recycled, ImpactFigures::new(0.9, 0.15, 0.2, 0.1), 89),
    (Metal::Gold, Variant::Virgin, ImpactFigures::new(25000.0, 3000.0, 5000.0, 1000.0), 20),
    (Metal::Gold, Variant::Recycled, ImpactFigures::new(150.0, 50.0, 200.0, 10.0), 95),
    (Metal::Silver, Variant::Virgin, ImpactFigures::new(12000.0, 1500.0, 2500.0, 500.0), 30),
    (Metal::Silver, Variant::Recycled, ImpactFigures::new(70.0, 20.0, 100.0, 5.0), 93),
];

/// Extraction, Manufacturing, Transportation, End-of-Life
const VIRGIN_PROFILE: [u8; 4] = [60, 30, 5, 5];
const RECYCLED_PROFILE: [u8; 4] = [10, 60, 10, 20];

/// Fixed impact table compiled into the binary
#[derive(Debug, Clone)]
pub struct StaticImpactTable {
    records: Vec<MaterialRecord>,
    virgin: LifecycleProfile,
    recycled: LifecycleProfile,
}

impl StaticImpactTable {
    pub fn new() -> Self {
        let records = RECORDS
            .iter()
            .map(|&(metal, variant, figures, score)| {
                MaterialRecord::new(MaterialId::new(metal, variant), figures, score)
            })
            .collect();

        Self {
            records,
            virgin: LifecycleProfile::new(VIRGIN_PROFILE),
            recycled: LifecycleProfile::new(RECYCLED_PROFILE),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StaticImpactTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ImpactTable for StaticImpactTable {
    fn get(&self, id: MaterialId) -> Option<&MaterialRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn profile(&self, variant: Variant) -> &LifecycleProfile {
        match variant {
            Variant::Virgin => &self.virgin,
            Variant::Recycled => &self.recycled,
        }
    }

    fn materials(&self) -> Vec<&MaterialRecord> {
        self.records.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lca_domain::model::LifecycleStage;
    use lca_types::Error;

    /// id, carbon, water, energy, waste, score
    const EXPECTED: [(&str, f64, f64, f64, f64, u8); 18] = [
        ("aluminum_virgin", 15.0, 1.5, 15.0, 2.5, 45),
        ("aluminum_recycled", 1.5, 0.1, 1.0, 0.2, 92),
        ("copper_virgin", 3.5, 2.0, 4.0, 0.8, 60),
        ("copper_recycled", 0.8, 0.3, 0.8, 0.15, 85),
        ("steel_virgin", 2.5, 0.5, 0.5, 1.2, 75),
        ("steel_recycled", 0.5, 0.1, 0.2, 0.1, 90),
        ("zinc_virgin", 3.0, 1.0, 1.5, 0.6, 68),
        ("zinc_recycled", 0.7, 0.2, 0.5, 0.1, 88),
        ("nickel_virgin", 5.0, 2.5, 5.5, 1.0, 55),
        ("nickel_recycled", 1.2, 0.4, 1.5, 0.2, 83),
        ("tin_virgin", 4.0, 1.8, 3.5, 0.7, 62),
        ("tin_recycled", 1.0, 0.3, 0.9, 0.1, 87),
        ("lead_virgin", 4.5, 0.8, 0.9, 1.5, 58),
        ("lead_recycled", 0.9, 0.15, 0.2, 0.1, 89),
        ("gold_virgin", 25000.0, 3000.0, 5000.0, 1000.0, 20),
        ("gold_recycled", 150.0, 50.0, 200.0, 10.0, 95),
        ("silver_virgin", 12000.0, 1500.0, 2500.0, 500.0, 30),
        ("silver_recycled", 70.0, 20.0, 100.0, 5.0, 93),
    ];

    #[test]
    fn test_every_identifier_resolves() {
        let table = StaticImpactTable::new();
        assert_eq!(table.len(), EXPECTED.len());

        for (id, carbon, water, energy, waste, score) in EXPECTED {
            let record = table.lookup(id).unwrap();
            assert_eq!(record.figures, ImpactFigures::new(carbon, water, energy, waste), "{}", id);
            assert_eq!(record.score, score, "{}", id);
        }
    }

    #[test]
    fn test_every_metal_has_both_variants() {
        let table = StaticImpactTable::new();
        for metal in Metal::ALL {
            assert!(table.get(MaterialId::new(metal, Variant::Virgin)).is_some());
            assert!(table.get(MaterialId::new(metal, Variant::Recycled)).is_some());
        }
    }

    #[test]
    fn test_exact_figures() {
        let table = StaticImpactTable::new();
        let copper = table.lookup("copper_recycled").unwrap();
        assert_eq!(copper.figures, ImpactFigures::new(0.8, 0.3, 0.8, 0.15));
        assert_eq!(copper.score, 85);

        let silver = table.lookup("silver_virgin").unwrap();
        assert_eq!(silver.figures.carbon, 12000.0);
        assert_eq!(silver.score, 30);
    }

    #[test]
    fn test_unknown_lookup() {
        let table = StaticImpactTable::new();
        for raw in ["platinum_virgin", "steel", "STEEL_VIRGIN", "steel_virgin "] {
            assert!(matches!(table.lookup(raw), Err(Error::MaterialNotFound(_))));
        }
    }

    #[test]
    fn test_profiles_sum_to_100() {
        let table = StaticImpactTable::new();
        assert_eq!(table.profile(Variant::Virgin).total(), 100);
        assert_eq!(table.profile(Variant::Recycled).total(), 100);
        assert_eq!(
            table.profile(Variant::Recycled).percent(LifecycleStage::ManufacturingProcessing),
            60
        );
    }

    #[test]
    fn test_materials_in_table_order() {
        let table = StaticImpactTable::new();
        let ids: Vec<_> = table.materials().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids.first().map(String::as_str), Some("aluminum_virgin"));
        assert_eq!(ids.last().map(String::as_str), Some("silver_recycled"));
    }
}
