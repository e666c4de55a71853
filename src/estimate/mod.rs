//! Cost estimation module
//!
//! Estimates cost, latency, and reliability for analyzed agent
//! systems:
//! - Token estimation from text length
//! - Per-model pricing tables
//! - Per-entity estimators under scenario multipliers
//! - Whole-system aggregation

pub mod cost;
pub mod pricing;
pub mod system;
pub mod tokens;

pub use cost::{
    estimate_agent_cost, estimate_connection_cost, estimate_tool_cost, CostEstimate,
    CostMultipliers,
};
pub use system::{calculate_system_cost, calculate_system_cost_with, SystemCostSummary};
pub use tokens::estimate_tokens;
