//! JSON export functionality
//!
//! Provides JSON serialization for test reports and cost estimates
//! with a versioned envelope.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::{ExportableEstimate, ExportableResult, ReportSummary};
use crate::estimate::SystemCostSummary;
use crate::Error;

const EXPORT_VERSION: &str = "1.0.0";

/// Complete test-report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExportJson {
    pub export_date: String,
    pub export_version: &'static str,
    pub summary: ReportSummary,
    pub results: Vec<ExportableResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<SystemCostSummary>,
}

/// Cost-estimate export structure
#[derive(Debug, Clone, Serialize)]
pub struct EstimatesExportJson {
    pub export_date: String,
    pub export_version: &'static str,
    pub total_entities: usize,
    pub total_daily: f64,
    pub total_monthly: f64,
    pub entities: Vec<ExportableEstimate>,
}

/// Write a full test report to JSON format
pub fn write_report_json(
    summary: &ReportSummary,
    results: &[ExportableResult],
    cost: Option<&SystemCostSummary>,
    path: &PathBuf,
) -> Result<(), Error> {
    let export = ReportExportJson {
        export_date: chrono::Utc::now().to_rfc3339(),
        export_version: EXPORT_VERSION,
        summary: summary.clone(),
        results: results.to_vec(),
        cost: cost.cloned(),
    };

    write_json_file(&export, path)
}

/// Write per-entity cost estimates to JSON format
pub fn write_estimates_json(
    estimates: &[ExportableEstimate],
    summary: &SystemCostSummary,
    path: &PathBuf,
) -> Result<(), Error> {
    let export = EstimatesExportJson {
        export_date: chrono::Utc::now().to_rfc3339(),
        export_version: EXPORT_VERSION,
        total_entities: estimates.len(),
        total_daily: summary.total_daily,
        total_monthly: summary.total_monthly,
        entities: estimates.to_vec(),
    };

    write_json_file(&export, path)
}

fn write_json_file<T: Serialize>(export: &T, path: &PathBuf) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(export)
        .map_err(|e| Error::Internal(format!("Failed to serialize JSON: {}", e)))?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| Error::Internal(format!("Failed to create JSON file: {}", e)))?;

    file.write_all(json.as_bytes())
        .map_err(|e| Error::Internal(format!("Failed to write JSON file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::calculate_system_cost;
    use crate::models::graph::SystemGraph;
    use crate::report::summarize_results;

    #[test]
    fn test_write_report_json_envelope() {
        let summary = summarize_results(&[]);
        let path = std::env::temp_dir().join("agentgauge_test_report.json");

        write_report_json(&summary, &[], None, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["export_version"], "1.0.0");
        assert!(parsed["export_date"].is_string());
        assert_eq!(parsed["summary"]["total_tests"], 0);
        // cost omitted when not supplied
        assert!(parsed.get("cost").is_none());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_report_json_with_cost() {
        let summary = summarize_results(&[]);
        let cost = calculate_system_cost(&SystemGraph::default());
        let path = std::env::temp_dir().join("agentgauge_test_report_cost.json");

        write_report_json(&summary, &[], Some(&cost), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["cost"]["avg_reliability"], 1.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_estimates_json() {
        let cost = calculate_system_cost(&SystemGraph::default());
        let path = std::env::temp_dir().join("agentgauge_test_estimates.json");

        write_estimates_json(&[], &cost, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["total_entities"], 0);
        assert_eq!(parsed["total_daily"], 0.0);
        assert!(parsed["entities"].as_array().unwrap().is_empty());

        std::fs::remove_file(&path).ok();
    }
}
