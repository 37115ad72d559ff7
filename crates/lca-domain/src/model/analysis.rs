//! Analysis result, history record and comparison types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::lifecycle::{LifecycleProfile, LifecycleStage};
use super::material::{MaterialId, Metal};

/// Display classification of a sustainability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Medium,
    Bad,
}

impl ScoreTier {
    /// `> 80` good, `> 60` medium, otherwise bad
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s > 80 => ScoreTier::Good,
            s if s > 60 => ScoreTier::Medium,
            _ => ScoreTier::Bad,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Good => "good",
            ScoreTier::Medium => "medium",
            ScoreTier::Bad => "bad",
        }
    }

    /// Styling class used by rendering layers
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Good => "score-good",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Bad => "score-bad",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Impact figures scaled to a quantity
///
/// Serialized figures are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledImpact {
    /// kg CO2e
    #[serde(serialize_with = "serialize_2dp")]
    pub carbon: f64,
    /// m³
    #[serde(serialize_with = "serialize_2dp")]
    pub water: f64,
    /// kWh
    #[serde(serialize_with = "serialize_2dp")]
    pub energy: f64,
    /// kg
    #[serde(serialize_with = "serialize_2dp")]
    pub waste: f64,
}

fn serialize_2dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}

impl ScaledImpact {
    pub fn carbon_display(&self) -> String {
        format!("{:.2}", self.carbon)
    }

    pub fn water_display(&self) -> String {
        format!("{:.2}", self.water)
    }

    pub fn energy_display(&self) -> String {
        format!("{:.2}", self.energy)
    }

    pub fn waste_display(&self) -> String {
        format!("{:.2}", self.waste)
    }

    /// Component-wise `self - other`
    pub fn minus(&self, other: &ScaledImpact) -> ScaledImpact {
        ScaledImpact {
            carbon: self.carbon - other.carbon,
            water: self.water - other.water,
            energy: self.energy - other.energy,
            waste: self.waste - other.waste,
        }
    }
}

/// Result bundle of a single analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub material_id: MaterialId,
    pub material_name: String,
    /// Quantity in kg
    pub quantity: f64,
    pub impact: ScaledImpact,
    pub overall_score: u8,
    pub score_tier: ScoreTier,
    pub lifecycle: LifecycleProfile,
    pub hotspot_stage: LifecycleStage,
    pub virgin_score: u8,
    pub recycled_score: u8,
}

impl AnalysisResult {
    /// What-if sentence comparing the virgin and recycled scores
    pub fn insight(&self) -> String {
        format!(
            "Switching to a recycled material would improve the LCA score from ~{} to ~{}.",
            self.virgin_score, self.recycled_score
        )
    }
}

/// History entry appended for every successful analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub material_id: MaterialId,
    pub material_name: String,
    /// Quantity in kg
    pub quantity: f64,
    pub overall_score: u8,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id: result.material_id,
            material_name: result.material_name.clone(),
            quantity: result.quantity,
            overall_score: result.overall_score,
            analyzed_at: Utc::now(),
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.overall_score)
    }
}

/// Aggregate figures over a history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub count: usize,
    /// Sum of analyzed quantities in kg
    pub total_quantity: f64,
    pub mean_score: f64,
    pub good_count: usize,
    pub medium_count: usize,
    pub bad_count: usize,
}

impl HistoryStats {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len();
        let total_quantity = records.iter().map(|r| r.quantity).sum();
        let score_sum: f64 = records.iter().map(|r| f64::from(r.overall_score)).sum();
        let tier_count =
            |tier: ScoreTier| records.iter().filter(|r| r.score_tier() == tier).count();

        Self {
            count,
            total_quantity,
            mean_score: score_sum / count as f64,
            good_count: tier_count(ScoreTier::Good),
            medium_count: tier_count(ScoreTier::Medium),
            bad_count: tier_count(ScoreTier::Bad),
        }
    }
}

/// Virgin vs. recycled scenario for one metal and quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub metal: Metal,
    /// Quantity in kg
    pub quantity: f64,
    pub virgin: ScaledImpact,
    pub recycled: ScaledImpact,
    pub virgin_score: u8,
    pub recycled_score: u8,
    /// Reduction obtained by switching from virgin to recycled
    pub savings: ScaledImpact,
    pub score_improvement: i16,
}

impl ScenarioComparison {
    pub fn new(
        metal: Metal,
        quantity: f64,
        virgin: ScaledImpact,
        recycled: ScaledImpact,
        virgin_score: u8,
        recycled_score: u8,
    ) -> Self {
        Self {
            metal,
            quantity,
            virgin,
            recycled,
            virgin_score,
            recycled_score,
            savings: virgin.minus(&recycled),
            score_improvement: i16::from(recycled_score) - i16::from(virgin_score),
        }
    }

    /// Carbon reduction as a percentage of the virgin footprint
    pub fn carbon_reduction_percent(&self) -> f64 {
        reduction_percent(self.savings.carbon, self.virgin.carbon)
    }

    pub fn water_reduction_percent(&self) -> f64 {
        reduction_percent(self.savings.water, self.virgin.water)
    }

    pub fn energy_reduction_percent(&self) -> f64 {
        reduction_percent(self.savings.energy, self.virgin.energy)
    }

    pub fn waste_reduction_percent(&self) -> f64 {
        reduction_percent(self.savings.waste, self.virgin.waste)
    }
}

fn reduction_percent(saved: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        saved / baseline * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(81), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(80), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(61), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(60), ScoreTier::Bad);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Bad);
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Good);
    }

    #[test]
    fn test_tier_css_class() {
        assert_eq!(ScoreTier::Good.css_class(), "score-good");
        assert_eq!(ScoreTier::Medium.css_class(), "score-medium");
        assert_eq!(ScoreTier::Bad.css_class(), "score-bad");
    }

    #[test]
    fn test_scaled_display_two_decimals() {
        let impact = ScaledImpact {
            carbon: 15.0,
            water: 1.0 / 3.0,
            energy: 10.005,
            waste: 0.0,
        };
        assert_eq!(impact.carbon_display(), "15.00");
        assert_eq!(impact.water_display(), "0.33");
        assert_eq!(impact.waste_display(), "0.00");
    }

    #[test]
    fn test_scaled_serializes_two_decimals() {
        let impact = ScaledImpact {
            carbon: 1.5,
            water: 0.1 * 3.0,
            energy: 0.2 * 3.0,
            waste: 1.0 / 3.0,
        };
        let value = serde_json::to_value(impact).unwrap();
        assert_eq!(value["carbon"], 1.5);
        assert_eq!(value["water"], 0.3);
        assert_eq!(value["energy"], 0.6);
        assert_eq!(value["waste"], 0.33);
    }

    #[test]
    fn test_history_stats() {
        let record = |score: u8, quantity: f64| AnalysisRecord {
            id: Uuid::new_v4(),
            material_id: "steel_virgin".parse().unwrap(),
            material_name: "Steel Virgin".to_string(),
            quantity,
            overall_score: score,
            analyzed_at: Utc::now(),
        };
        let records = vec![record(90, 1.0), record(75, 2.0), record(45, 3.0), record(92, 4.0)];

        let stats = HistoryStats::from_records(&records);
        assert_eq!(stats.count, 4);
        assert!((stats.total_quantity - 10.0).abs() < 1e-9);
        assert!((stats.mean_score - 75.5).abs() < 1e-9);
        assert_eq!(stats.good_count, 2);
        assert_eq!(stats.medium_count, 1);
        assert_eq!(stats.bad_count, 1);
    }

    #[test]
    fn test_history_stats_empty() {
        let stats = HistoryStats::from_records(&[]);
        assert_eq!(stats, HistoryStats::default());
    }

    #[test]
    fn test_scenario_savings() {
        let virgin = ScaledImpact {
            carbon: 25.0,
            water: 5.0,
            energy: 5.0,
            waste: 12.0,
        };
        let recycled = ScaledImpact {
            carbon: 5.0,
            water: 1.0,
            energy: 2.0,
            waste: 1.0,
        };
        let comparison = ScenarioComparison::new(Metal::Steel, 10.0, virgin, recycled, 75, 90);

        assert_eq!(comparison.score_improvement, 15);
        assert!((comparison.savings.carbon - 20.0).abs() < 1e-9);
        assert!((comparison.carbon_reduction_percent() - 80.0).abs() < 1e-9);
        assert!((comparison.energy_reduction_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_percent_zero_baseline() {
        assert_eq!(reduction_percent(1.0, 0.0), 0.0);
    }
}
