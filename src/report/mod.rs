//! Report module for test-run aggregation and export
//!
//! Aggregates simulated test results into per-category summaries,
//! joins them with system cost estimates, and exports reports in CSV
//! and JSON formats.

pub mod csv_export;
pub mod json_export;

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::benchmarks::{find_benchmark, PerformanceBenchmarks};
use crate::estimate::{CostEstimate, SystemCostSummary};
use crate::models::graph::SystemGraph;
use crate::models::testing::{TestCategory, TestResult, TestStatus};
use crate::Error;

/// Export format options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::Internal(format!(
                "Invalid export format: {}. Use 'csv' or 'json'",
                s
            ))),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Aggregated outcomes for one test category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: TestCategory,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
    /// Fraction of tests in [0, 1] that passed
    pub pass_rate: f64,
    /// Mean score over results that carried one
    pub avg_score: Option<f64>,
    pub benchmark_target: Option<f64>,
    /// Benchmark verdict: avg_score when scores exist, otherwise the
    /// pass rate on a 0-100 scale, measured against the target
    pub meets_benchmark: Option<bool>,
}

impl CategorySummary {
    fn new(category: TestCategory) -> Self {
        Self {
            category,
            total: 0,
            passed: 0,
            failed: 0,
            warnings: 0,
            pass_rate: 0.0,
            avg_score: None,
            benchmark_target: None,
            meets_benchmark: None,
        }
    }

    fn add(&mut self, result: &TestResult, score_sum: &mut f64, score_count: &mut u32) {
        self.total += 1;
        match result.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Warning => self.warnings += 1,
        }
        if let Some(score) = result.score {
            *score_sum += score;
            *score_count += 1;
        }
    }

    fn finalize(&mut self, score_sum: f64, score_count: u32) {
        if self.total > 0 {
            self.pass_rate = self.passed as f64 / self.total as f64;
        }
        if score_count > 0 {
            self.avg_score = Some(score_sum / score_count as f64);
        }
        if let Some(benchmark) = find_benchmark(self.category) {
            self.benchmark_target = Some(benchmark.target);
            let measured = self.avg_score.unwrap_or(self.pass_rate * 100.0);
            self.meets_benchmark = Some(benchmark.meets(measured));
        }
    }
}

/// Aggregated report over one test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_at: String,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
    /// Overall fraction of tests in [0, 1] that passed
    pub pass_rate: f64,
    pub avg_duration_ms: Option<f64>,
    /// Per-category breakdown in display order; categories with no
    /// results are omitted
    pub categories: Vec<CategorySummary>,
}

/// Aggregate test results into a report.
///
/// Deterministic: categories appear in display order regardless of
/// result order.
pub fn summarize_results(results: &[TestResult]) -> ReportSummary {
    let mut summaries: HashMap<TestCategory, (CategorySummary, f64, u32)> = HashMap::new();

    for result in results {
        let entry = summaries
            .entry(result.category)
            .or_insert_with(|| (CategorySummary::new(result.category), 0.0, 0));
        let (summary, score_sum, score_count) = entry;
        summary.add(result, score_sum, score_count);
    }

    let categories: Vec<CategorySummary> = TestCategory::ALL
        .into_iter()
        .filter_map(|category| {
            summaries.remove(&category).map(|(mut summary, sum, count)| {
                summary.finalize(sum, count);
                summary
            })
        })
        .collect();

    let total_tests = results.len() as u32;
    let passed = results.iter().filter(|r| r.passed()).count() as u32;
    let failed = results
        .iter()
        .filter(|r| r.status == TestStatus::Failed)
        .count() as u32;
    let warnings = results
        .iter()
        .filter(|r| r.status == TestStatus::Warning)
        .count() as u32;

    let durations: Vec<u64> = results.iter().filter_map(|r| r.duration_ms).collect();
    let avg_duration_ms = if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<u64>() as f64 / durations.len() as f64)
    };

    ReportSummary {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total_tests,
        passed,
        failed,
        warnings,
        pass_rate: if total_tests > 0 {
            passed as f64 / total_tests as f64
        } else {
            0.0
        },
        avg_duration_ms,
        categories,
    }
}

/// Report joined with system-level estimate verdicts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemVerdict {
    pub report: ReportSummary,
    pub latency_within_budget: bool,
    pub reliability_within_budget: bool,
}

/// Evaluate a test run and the system estimates against the
/// performance benchmarks.
pub fn evaluate_system(
    results: &[TestResult],
    cost: &SystemCostSummary,
    benchmarks: &PerformanceBenchmarks,
) -> SystemVerdict {
    SystemVerdict {
        report: summarize_results(results),
        latency_within_budget: benchmarks.latency_ok(cost.total_latency_ms),
        reliability_within_budget: benchmarks.reliability_ok(cost.avg_reliability),
    }
}

/// Flattened per-entity estimate record for CSV/JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableEstimate {
    /// Entity kind: "agent", "tool", or "connection"
    pub kind: String,
    pub name: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub api_calls: u64,
    pub daily_cost: f64,
    pub latency_ms: u64,
    pub reliability: f64,
}

impl ExportableEstimate {
    pub fn from_estimate(kind: &str, name: &str, estimate: &CostEstimate) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            model: estimate.model.clone(),
            input_tokens: estimate.input_tokens,
            output_tokens: estimate.output_tokens,
            api_calls: estimate.api_calls,
            daily_cost: estimate.total_cost,
            latency_ms: estimate.latency_ms.unwrap_or(0),
            reliability: estimate.reliability.unwrap_or(1.0),
        }
    }
}

/// Flatten a system summary into per-entity records, pairing each
/// estimate with its entity name from the graph.
pub fn flatten_summary(graph: &SystemGraph, summary: &SystemCostSummary) -> Vec<ExportableEstimate> {
    let mut records = Vec::with_capacity(graph.entity_count());

    for (agent, estimate) in graph.agents.iter().zip(&summary.agents) {
        records.push(ExportableEstimate::from_estimate("agent", &agent.name, estimate));
    }
    for (tool, estimate) in graph.tools.iter().zip(&summary.tools) {
        records.push(ExportableEstimate::from_estimate("tool", &tool.name, estimate));
    }
    for (connection, estimate) in graph.relationships.iter().zip(&summary.connections) {
        let name = format!("{} -> {}", connection.source, connection.target);
        records.push(ExportableEstimate::from_estimate("connection", &name, estimate));
    }

    records
}

/// Flattened test result record for CSV/JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportableResult {
    pub test_id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub duration_ms: u64,
    pub score: Option<f64>,
    pub message: Option<String>,
}

impl From<&TestResult> for ExportableResult {
    fn from(result: &TestResult) -> Self {
        Self {
            test_id: result.test_id.clone(),
            name: result.name.clone(),
            category: result.category.label().to_string(),
            status: match result.status {
                TestStatus::Passed => "passed",
                TestStatus::Failed => "failed",
                TestStatus::Warning => "warning",
            }
            .to_string(),
            duration_ms: result.duration_ms.unwrap_or(0),
            score: result.score,
            message: result.message.clone(),
        }
    }
}

/// Get the default export directory (Downloads folder or temp dir)
pub fn get_export_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .unwrap_or_else(std::env::temp_dir)
}

/// Generate a timestamped filename for exports
pub fn generate_export_filename(prefix: &str, extension: &str) -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", prefix, timestamp, extension)
}

pub use csv_export::*;
pub use json_export::*;
