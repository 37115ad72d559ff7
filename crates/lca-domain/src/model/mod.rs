//! Domain model types

pub mod analysis;
pub mod lifecycle;
pub mod material;

pub use analysis::{
    AnalysisRecord, AnalysisResult, HistoryStats, ScaledImpact, ScenarioComparison, ScoreTier,
};
pub use lifecycle::{LifecycleProfile, LifecycleStage};
pub use material::{ImpactFigures, MaterialId, MaterialRecord, Metal, Variant};
