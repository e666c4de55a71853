//! Benchmark definitions
//!
//! Target thresholds that measured test scores and system estimates
//! are compared against.

use serde::{Deserialize, Serialize};

use crate::models::testing::TestCategory;

/// Target threshold for one test category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    pub category: TestCategory,
    /// Target score in [0, 100]
    pub target: f64,
    /// Plausible score range for the category
    pub min: f64,
    pub max: f64,
}

impl Benchmark {
    /// Whether a measured score meets the target
    pub fn meets(&self, score: f64) -> bool {
        score >= self.target
    }

    /// Signed distance from the target; negative means below
    pub fn margin(&self, score: f64) -> f64 {
        score - self.target
    }
}

/// Default per-category benchmarks
pub fn default_benchmarks() -> Vec<Benchmark> {
    vec![
        benchmark(TestCategory::Hyperparameter, 90.0),
        benchmark(TestCategory::PromptInjection, 90.0),
        benchmark(TestCategory::ToolCalling, 95.0),
        benchmark(TestCategory::Relationship, 85.0),
        benchmark(TestCategory::Collaborative, 85.0),
        benchmark(TestCategory::ErrorHandling, 90.0),
        benchmark(TestCategory::OutputQuality, 85.0),
        benchmark(TestCategory::Performance, 90.0),
        benchmark(TestCategory::EdgeCase, 80.0),
        benchmark(TestCategory::Security, 95.0),
    ]
}

fn benchmark(category: TestCategory, target: f64) -> Benchmark {
    Benchmark {
        category,
        target,
        min: 50.0,
        max: 100.0,
    }
}

/// Look up the benchmark for a category
pub fn find_benchmark(category: TestCategory) -> Option<Benchmark> {
    default_benchmarks()
        .into_iter()
        .find(|b| b.category == category)
}

/// System-level performance targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceBenchmarks {
    /// Worst acceptable serial latency through the system
    pub max_latency_ms: u64,
    /// Fraction of simulated calls the backend injects failures into
    pub failure_injection_rate: f64,
    /// Minimum acceptable end-to-end success probability
    pub min_reliability: f64,
}

impl Default for PerformanceBenchmarks {
    fn default() -> Self {
        Self {
            max_latency_ms: 500,
            failure_injection_rate: 0.1,
            min_reliability: 0.90,
        }
    }
}

impl PerformanceBenchmarks {
    pub fn latency_ok(&self, latency_ms: u64) -> bool {
        latency_ms <= self.max_latency_ms
    }

    pub fn reliability_ok(&self, reliability: f64) -> bool {
        reliability >= self.min_reliability
    }
}
