//! Display formatting and tier helpers
//!
//! Pure presentation helpers mapping numeric cost/latency/reliability
//! values to display strings and color-coded tiers for the dashboard.

use serde::{Deserialize, Serialize};

/// Daily cost display tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// Under $0.01/day
    Minimal,
    /// Under $0.10/day
    Low,
    /// Under $1.00/day
    Moderate,
    /// $1.00/day and above
    High,
}

impl CostTier {
    pub fn from_cost(daily_cost: f64) -> Self {
        if daily_cost < 0.01 {
            CostTier::Minimal
        } else if daily_cost < 0.1 {
            CostTier::Low
        } else if daily_cost < 1.0 {
            CostTier::Moderate
        } else {
            CostTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostTier::Minimal => "Minimal",
            CostTier::Low => "Low",
            CostTier::Moderate => "Moderate",
            CostTier::High => "High",
        }
    }

    /// Dashboard accent color
    pub fn color(&self) -> &'static str {
        match self {
            CostTier::Minimal => "green",
            CostTier::Low => "teal",
            CostTier::Moderate => "orange",
            CostTier::High => "red",
        }
    }
}

/// End-to-end latency display tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyTier {
    /// Under 100ms
    Fast,
    /// Under 500ms
    Good,
    /// Under 1s
    Moderate,
    /// Under 3s
    Slow,
    /// 3s and above
    Critical,
}

impl LatencyTier {
    pub fn from_latency(latency_ms: u64) -> Self {
        if latency_ms < 100 {
            LatencyTier::Fast
        } else if latency_ms < 500 {
            LatencyTier::Good
        } else if latency_ms < 1000 {
            LatencyTier::Moderate
        } else if latency_ms < 3000 {
            LatencyTier::Slow
        } else {
            LatencyTier::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LatencyTier::Fast => "Fast",
            LatencyTier::Good => "Good",
            LatencyTier::Moderate => "Moderate",
            LatencyTier::Slow => "Slow",
            LatencyTier::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LatencyTier::Fast => "green",
            LatencyTier::Good => "teal",
            LatencyTier::Moderate => "yellow",
            LatencyTier::Slow => "orange",
            LatencyTier::Critical => "red",
        }
    }
}

/// System reliability display tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliabilityTier {
    /// 99% and above
    Excellent,
    /// 95% and above
    Good,
    /// 90% and above
    Fair,
    /// 80% and above
    Poor,
    /// Below 80%
    Critical,
}

impl ReliabilityTier {
    pub fn from_reliability(reliability: f64) -> Self {
        if reliability >= 0.99 {
            ReliabilityTier::Excellent
        } else if reliability >= 0.95 {
            ReliabilityTier::Good
        } else if reliability >= 0.90 {
            ReliabilityTier::Fair
        } else if reliability >= 0.80 {
            ReliabilityTier::Poor
        } else {
            ReliabilityTier::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReliabilityTier::Excellent => "Excellent",
            ReliabilityTier::Good => "Good",
            ReliabilityTier::Fair => "Fair",
            ReliabilityTier::Poor => "Poor",
            ReliabilityTier::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ReliabilityTier::Excellent => "green",
            ReliabilityTier::Good => "teal",
            ReliabilityTier::Fair => "yellow",
            ReliabilityTier::Poor => "orange",
            ReliabilityTier::Critical => "red",
        }
    }
}

/// Format a cost in the band-appropriate unit: under a cent as
/// millidollars, under a dollar as cents, else dollars.
pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("${:.1}m", cost * 1000.0)
    } else if cost < 1.0 {
        format!("${:.1}¢", cost * 100.0)
    } else {
        format!("${:.2}", cost)
    }
}

/// Format a latency, switching to seconds at 1s
pub fn format_latency(latency_ms: u64) -> String {
    if latency_ms < 1000 {
        format!("{}ms", latency_ms)
    } else {
        format!("{:.1}s", latency_ms as f64 / 1000.0)
    }
}

/// Format a reliability as a percentage
pub fn format_reliability(reliability: f64) -> String {
    format!("{:.1}%", reliability * 100.0)
}
