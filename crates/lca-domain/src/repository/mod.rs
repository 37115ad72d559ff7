//! Repository trait definitions for impact data and analysis history

use lca_types::Error;

use crate::model::{AnalysisRecord, LifecycleProfile, MaterialId, MaterialRecord, Variant};

/// Read-only table of per-kilogram impact figures
pub trait ImpactTable {
    /// Record for a parsed identifier
    fn get(&self, id: MaterialId) -> Option<&MaterialRecord>;

    /// Stage breakdown for a sourcing variant
    fn profile(&self, variant: Variant) -> &LifecycleProfile;

    /// All records in table order
    fn materials(&self) -> Vec<&MaterialRecord>;

    /// Resolve a raw identifier; unknown or malformed ids are `MaterialNotFound`
    fn lookup(&self, material_id: &str) -> Result<&MaterialRecord, Error> {
        let id: MaterialId = material_id.parse()?;
        self.get(id)
            .ok_or_else(|| Error::MaterialNotFound(material_id.to_string()))
    }
}

/// Append-only history of successful analyses
pub trait AnalysisHistoryRepository {
    /// Append a record after the last one
    fn append(&self, record: AnalysisRecord) -> Result<(), Error>;

    /// All records in append order
    fn find_all(&self) -> Result<Vec<AnalysisRecord>, Error>;

    /// Number of records
    fn count(&self) -> Result<usize, Error>;
}
