//! Small in-crate fixtures for service tests

use std::cell::RefCell;

use lca_types::Error;

use crate::model::{
    AnalysisRecord, ImpactFigures, LifecycleProfile, MaterialId, MaterialRecord, Metal, Variant,
};
use crate::repository::{AnalysisHistoryRepository, ImpactTable};

pub struct FixtureTable {
    records: Vec<MaterialRecord>,
    virgin: LifecycleProfile,
    recycled: LifecycleProfile,
}

impl FixtureTable {
    /// Aluminum, steel and gold pairs plus a copper entry without its counterpart
    pub fn new() -> Self {
        let record = |metal, variant, [carbon, water, energy, waste]: [f64; 4], score| {
            let figures = ImpactFigures::new(carbon, water, energy, waste);
            MaterialRecord::new(MaterialId::new(metal, variant), figures, score)
        };
        Self {
            records: vec![
                record(Metal::Aluminum, Variant::Virgin, [15.0, 1.5, 15.0, 2.5], 45),
                record(Metal::Aluminum, Variant::Recycled, [1.5, 0.1, 1.0, 0.2], 92),
                record(Metal::Steel, Variant::Virgin, [2.5, 0.5, 0.5, 1.2], 75),
                record(Metal::Steel, Variant::Recycled, [0.5, 0.1, 0.2, 0.1], 90),
                record(Metal::Gold, Variant::Virgin, [25000.0, 3000.0, 5000.0, 1000.0], 20),
                record(Metal::Gold, Variant::Recycled, [150.0, 50.0, 200.0, 10.0], 95),
                record(Metal::Copper, Variant::Virgin, [3.5, 2.0, 4.0, 0.8], 60),
            ],
            virgin: LifecycleProfile::new([60, 30, 5, 5]),
            recycled: LifecycleProfile::new([10, 60, 10, 20]),
        }
    }
}

impl ImpactTable for FixtureTable {
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

#[derive(Default)]
pub struct VecHistory {
    records: RefCell<Vec<AnalysisRecord>>,
}

impl AnalysisHistoryRepository for VecHistory {
    fn append(&self, record: AnalysisRecord) -> Result<(), Error> {
        self.records.borrow_mut().push(record);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<AnalysisRecord>, Error> {
        Ok(self.records.borrow().clone())
    }

    fn count(&self) -> Result<usize, Error> {
        Ok(self.records.borrow().len())
    }
}
