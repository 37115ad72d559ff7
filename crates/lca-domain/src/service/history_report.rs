//! Plain-text report over the analysis history

use crate::model::{AnalysisRecord, HistoryStats};

pub fn generate_history_report(records: &[AnalysisRecord]) -> String {
    let stats = HistoryStats::from_records(records);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Previous Analyses                   \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Analyses:          {}\n", stats.count));

    if records.is_empty() {
        report.push_str("\n  No analyses recorded yet.\n\n");
        report.push_str("==================================================\n");
        return report;
    }

    report.push_str(&format!("  Total quantity:    {:.2} kg\n", stats.total_quantity));
    report.push_str(&format!("  Mean score:        {:.1}\n", stats.mean_score));
    report.push_str(&format!(
        "  Good / Medium / Bad: {} / {} / {}\n\n",
        stats.good_count, stats.medium_count, stats.bad_count
    ));

    report.push_str(&format!(
        "{:>3} {:<24} {:>12} {:>6} {:<7} {:>12}\n",
        "#", "Material", "Qty (kg)", "Score", "Tier", "Time"
    ));
    report.push_str("-".repeat(68).as_str());
    report.push('\n');
    for (idx, record) in records.iter().enumerate() {
        report.push_str(&format!(
            "{:>3} {:<24} {:>12.2} {:>6} {:<7} {:>12}\n",
            idx + 1,
            truncate_str(&record.material_name, 24),
            record.quantity,
            record.overall_score,
            record.score_tier().label(),
            record.analyzed_at.format("%m/%d %H:%M:%S")
        ));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
