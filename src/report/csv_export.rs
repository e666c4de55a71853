//! CSV export functionality
//!
//! Provides CSV serialization for test results, category summaries,
//! and per-entity cost estimates.

use std::path::PathBuf;

use csv::Writer;

use super::{CategorySummary, ExportableEstimate, ExportableResult};
use crate::Error;

/// Write test results to CSV format
pub fn write_results_csv(results: &[ExportableResult], path: &PathBuf) -> Result<(), Error> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Internal(format!("Failed to create CSV file: {}", e)))?;

    let mut writer = Writer::from_writer(file);

    for result in results {
        writer
            .serialize(result)
            .map_err(|e| Error::Internal(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Internal(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

/// Write category summaries to CSV format
pub fn write_categories_csv(categories: &[CategorySummary], path: &PathBuf) -> Result<(), Error> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Internal(format!("Failed to create CSV file: {}", e)))?;

    let mut writer = Writer::from_writer(file);

    // Custom flat record: the category enum serializes as a plain
    // string so spreadsheet tools get one column
    #[derive(serde::Serialize)]
    struct CategoryRecord<'a> {
        category: &'a str,
        total: u32,
        passed: u32,
        failed: u32,
        warnings: u32,
        pass_rate: f64,
        avg_score: Option<f64>,
        benchmark_target: Option<f64>,
        meets_benchmark: Option<bool>,
    }

    for summary in categories {
        let record = CategoryRecord {
            category: summary.category.label(),
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            warnings: summary.warnings,
            pass_rate: summary.pass_rate,
            avg_score: summary.avg_score,
            benchmark_target: summary.benchmark_target,
            meets_benchmark: summary.meets_benchmark,
        };
        writer
            .serialize(record)
            .map_err(|e| Error::Internal(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Internal(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

/// Write per-entity cost estimates to CSV format
pub fn write_estimates_csv(estimates: &[ExportableEstimate], path: &PathBuf) -> Result<(), Error> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::Internal(format!("Failed to create CSV file: {}", e)))?;

    let mut writer = Writer::from_writer(file);

    for estimate in estimates {
        writer
            .serialize(estimate)
            .map_err(|e| Error::Internal(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::Internal(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}
