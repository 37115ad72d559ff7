//! Output formatting module

use std::fmt::Write;

use lca_app::app::BatchSummary;
use lca_domain::model::{
    AnalysisRecord, AnalysisResult, HistoryStats, MaterialRecord, ScenarioComparison,
};
use lca_domain::service::generate_history_report;
use lca_types::{OutputFormat, Result};
use serde::Serialize;

// write! into a String cannot fail
macro_rules! outln {
    ($out:expr) => {
        let _ = writeln!($out);
    };
    ($out:expr, $($arg:tt)*) => {
        let _ = writeln!($out, $($arg)*);
    };
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_result(output_format: OutputFormat, result: &AnalysisResult) -> Result<String> {
    if output_format == OutputFormat::Json {
        return to_json(result);
    }

    let mut out = String::new();
    let title = format!("LCA Results for {}", result.material_name);
    outln!(out, "\n{}", title);
    outln!(out, "{}", "=".repeat(title.chars().count()));
    outln!(out, "Quantity:        {} kg", result.quantity);
    outln!(
        out,
        "Overall score:   {} ({})",
        result.overall_score, result.score_tier
    );

    outln!(out, "\n--- Impact ---");
    outln!(out, "Carbon:          {} kg CO2e", result.impact.carbon_display());
    outln!(out, "Water:           {} m³", result.impact.water_display());
    outln!(out, "Energy:          {} kWh", result.impact.energy_display());
    outln!(out, "Waste:           {} kg", result.impact.waste_display());

    outln!(out, "\n--- Life Cycle Stage Breakdown ---");
    for (stage, pct) in result.lifecycle.stages() {
        outln!(
            out,
            "{:<28} {:>3}% {}",
            stage.label(),
            pct,
            "#".repeat(usize::from(*pct) / 5)
        );
    }
    outln!(
        out,
        "Hotspot: {} has the highest impact.",
        result.hotspot_stage
    );

    outln!(out, "\n--- Comparison & What-If ---");
    outln!(out, "{}", result.insight());

    Ok(out)
}

pub fn render_comparison(
    output_format: OutputFormat,
    comparison: &ScenarioComparison,
) -> Result<String> {
    if output_format == OutputFormat::Json {
        return to_json(comparison);
    }

    let mut out = String::new();
    outln!(
        out,
        "\nScenario: {} kg of {}",
        comparison.quantity,
        comparison.metal.label()
    );
    outln!(out, "==================================");
    outln!(
        out,
        "{:<10} {:>14} {:>14} {:>14} {:>8}",
        "", "Virgin", "Recycled", "Saved", "Saved %"
    );
    outln!(out, "{}", "-".repeat(64));

    let c = comparison;
    let rows = [
        ("Carbon", c.virgin.carbon, c.recycled.carbon, c.carbon_reduction_percent()),
        ("Water", c.virgin.water, c.recycled.water, c.water_reduction_percent()),
        ("Energy", c.virgin.energy, c.recycled.energy, c.energy_reduction_percent()),
        ("Waste", c.virgin.waste, c.recycled.waste, c.waste_reduction_percent()),
    ];
    for (name, virgin, recycled, pct) in rows {
        outln!(
            out,
            "{:<10} {:>14.2} {:>14.2} {:>14.2} {:>7.1}%",
            name,
            virgin,
            recycled,
            virgin - recycled,
            pct
        );
    }
    outln!(out, "{}", "-".repeat(64));
    outln!(
        out,
        "{:<10} {:>14} {:>14} {:>+14}",
        "Score", comparison.virgin_score, comparison.recycled_score, comparison.score_improvement
    );

    Ok(out)
}

pub fn render_materials(
    output_format: OutputFormat,
    materials: &[&MaterialRecord],
) -> Result<String> {
    if output_format == OutputFormat::Json {
        return to_json(materials);
    }

    let mut out = String::new();
    outln!(
        out,
        "{:<20} {:<20} {:>10} {:>9} {:>9} {:>9} {:>6}",
        "ID", "Name", "CO2e/kg", "m³/kg", "kWh/kg", "Waste/kg", "Score"
    );
    outln!(out, "{}", "-".repeat(89));
    for record in materials {
        outln!(
            out,
            "{:<20} {:<20} {:>10.2} {:>9.2} {:>9.2} {:>9.2} {:>6}",
            record.id.to_string(),
            record.display_name(),
            record.figures.carbon,
            record.figures.water,
            record.figures.energy,
            record.figures.waste,
            record.score
        );
    }
    Ok(out)
}

/// History listing limited to the last `limit` entries
pub fn render_history(
    output_format: OutputFormat,
    records: &[AnalysisRecord],
    limit: usize,
) -> Result<String> {
    let skip = records.len().saturating_sub(limit);
    let shown = &records[skip..];

    if output_format == OutputFormat::Json {
        return to_json(shown);
    }
    Ok(generate_history_report(shown))
}

pub fn render_stats(output_format: OutputFormat, stats: &HistoryStats) -> Result<String> {
    if output_format == OutputFormat::Json {
        return to_json(stats);
    }

    let mut out = String::new();
    outln!(out, "History Statistics");
    outln!(out, "==================");
    outln!(out, "Analyses:        {}", stats.count);
    outln!(out, "Total quantity:  {:.2} kg", stats.total_quantity);
    outln!(out, "Mean score:      {:.1}", stats.mean_score);
    outln!(out, "Good:            {}", stats.good_count);
    outln!(out, "Medium:          {}", stats.medium_count);
    outln!(out, "Bad:             {}", stats.bad_count);
    Ok(out)
}

pub fn render_batch_summary(
    output_format: OutputFormat,
    summary: &BatchSummary,
) -> Result<String> {
    if output_format == OutputFormat::Json {
        return to_json(summary);
    }

    let mut out = String::new();
    outln!(out, "\nBatch Results");
    outln!(out, "=============");
    outln!(
        out,
        "{:>4} {:<22} {:>12} {:>6} {:<7} {:>12}",
        "Row", "Material", "Qty (kg)", "Score", "Tier", "CO2e"
    );
    outln!(out, "{}", "-".repeat(68));
    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(result) => {
                outln!(
                    out,
                    "{:>4} {:<22} {:>12.2} {:>6} {:<7} {:>12}",
                    outcome.request.row,
                    result.material_name,
                    result.quantity,
                    result.overall_score,
                    result.score_tier.label(),
                    result.impact.carbon_display()
                );
            }
            Err(e) => {
                outln!(
                    out,
                    "{:>4} {:<22} error: {}",
                    outcome.request.row,
                    outcome.request.material,
                    e
                );
            }
        }
    }
    outln!(out);
    outln!(
        out,
        "Successful: {}  Failed: {}",
        summary.successful, summary.failed
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lca_app::app::AnalysisService;

    #[test]
    fn test_render_result_table() {
        let service = AnalysisService::new();
        let result = service.analyze("aluminum_recycled", 10.0).unwrap();

        let text = render_result(OutputFormat::Table, &result).unwrap();
        assert!(text.contains("LCA Results for Aluminum Recycled"));
        assert!(text.contains("Carbon:          15.00 kg CO2e"));
        assert!(text.contains("Overall score:   92 (good)"));
        assert!(text.contains("Hotspot: Manufacturing & Processing has the highest impact."));
        assert!(text.contains("from ~45 to ~92"));
    }

    #[test]
    fn test_render_result_json() {
        let service = AnalysisService::new();
        let result = service.analyze("steel_virgin", 1.0).unwrap();

        let text = render_result(OutputFormat::Json, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["material_id"], "steel_virgin");
        assert_eq!(value["virgin_score"], 75);
        assert_eq!(value["recycled_score"], 90);
        assert_eq!(value["score_tier"], "medium");
        assert_eq!(value["hotspot_stage"], "Raw Material Extraction");
    }

    #[test]
    fn test_render_result_json_figures_rounded() {
        let service = AnalysisService::new();
        let result = service.analyze("steel_recycled", 3.0).unwrap();

        let text = render_result(OutputFormat::Json, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["impact"]["carbon"], 1.5);
        assert_eq!(value["impact"]["water"], 0.3);
        assert_eq!(value["impact"]["energy"], 0.6);
        assert_eq!(value["impact"]["waste"], 0.3);
        assert!(!text.contains("0000000"));
    }

    #[test]
    fn test_render_materials_lists_all() {
        let service = AnalysisService::new();
        let text = render_materials(OutputFormat::Table, &service.materials()).unwrap();
        assert_eq!(text.lines().count(), 2 + 18);
        assert!(text.contains("Silver Recycled"));
    }

    #[test]
    fn test_render_history_limit_json() {
        let service = AnalysisService::new();
        for id in ["steel_virgin", "zinc_virgin", "tin_recycled"] {
            service.analyze(id, 1.0).unwrap();
        }

        let text = render_history(OutputFormat::Json, &service.history().unwrap(), 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let names: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["material_name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Zinc Virgin", "Tin Recycled"]);
    }

    #[test]
    fn test_render_comparison_table() {
        let service = AnalysisService::new();
        let comparison = service.compare("steel", 10.0).unwrap();
        let text = render_comparison(OutputFormat::Table, &comparison).unwrap();
        assert!(text.contains("Scenario: 10 kg of Steel"));
        assert!(text.contains("80.0%"));
        assert!(text.contains("+15"));
    }
}
