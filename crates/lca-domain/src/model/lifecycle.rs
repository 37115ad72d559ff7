//! Life-cycle stage breakdown

use serde::{Deserialize, Serialize};

/// Life-cycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    #[serde(rename = "Raw Material Extraction")]
    RawMaterialExtraction,
    #[serde(rename = "Manufacturing & Processing")]
    ManufacturingProcessing,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "End-of-Life")]
    EndOfLife,
}

impl LifecycleStage {
    /// All stages in profile order
    pub const ALL: [LifecycleStage; 4] = [
        LifecycleStage::RawMaterialExtraction,
        LifecycleStage::ManufacturingProcessing,
        LifecycleStage::Transportation,
        LifecycleStage::EndOfLife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStage::RawMaterialExtraction => "Raw Material Extraction",
            LifecycleStage::ManufacturingProcessing => "Manufacturing & Processing",
            LifecycleStage::Transportation => "Transportation",
            LifecycleStage::EndOfLife => "End-of-Life",
        }
    }
}

impl std::fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage share of impact per stage, in fixed stage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleProfile {
    stages: [(LifecycleStage, u8); 4],
}

impl LifecycleProfile {
    /// Build from percentages given in `LifecycleStage::ALL` order
    pub const fn new(percentages: [u8; 4]) -> Self {
        Self {
            stages: [
                (LifecycleStage::RawMaterialExtraction, percentages[0]),
                (LifecycleStage::ManufacturingProcessing, percentages[1]),
                (LifecycleStage::Transportation, percentages[2]),
                (LifecycleStage::EndOfLife, percentages[3]),
            ],
        }
    }

    /// (stage, percent) pairs in order
    pub fn stages(&self) -> &[(LifecycleStage, u8)] {
        &self.stages
    }

    pub fn percent(&self, stage: LifecycleStage) -> u8 {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, pct)| *pct)
            .unwrap_or(0)
    }

    /// Sum of all percentages (100 for the built-in profiles)
    pub fn total(&self) -> u32 {
        self.stages.iter().map(|(_, pct)| u32::from(*pct)).sum()
    }

    /// Stage with the largest share; the first one wins on ties
    pub fn hotspot(&self) -> LifecycleStage {
        let mut best = self.stages[0];
        for entry in &self.stages[1..] {
            if entry.1 > best.1 {
                best = *entry;
            }
        }
        best.0
    }
}
