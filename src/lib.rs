//! Agentgauge - Agent System Benchmarking Core
//!
//! This library provides the Rust core for the agent benchmarking dashboard.
//! It handles:
//! - Typed modeling of the analyzed agent/tool/relationship graph
//! - System cost/latency/reliability estimation under scenario multipliers
//! - Benchmark evaluation and test-report aggregation
//! - CSV/JSON report export
//! - A typed async client for the analysis/testing backend API

pub mod api;
pub mod benchmarks;
pub mod display;
pub mod estimate;
pub mod models;
pub mod report;
pub mod store;

/// Error type for report and export operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// String form for surfacing errors to the dashboard layer
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Initialize logging for hosts that do not install their own subscriber
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

pub use estimate::{
    calculate_system_cost, calculate_system_cost_with, CostEstimate, CostMultipliers,
    SystemCostSummary,
};
pub use models::graph::SystemGraph;
pub use store::{Action, DashboardState};
