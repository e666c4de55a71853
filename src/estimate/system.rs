//! System-level cost aggregation
//!
//! Folds per-entity estimates into whole-system totals.

use serde::{Deserialize, Serialize};

use super::cost::{
    estimate_agent_cost, estimate_connection_cost, estimate_tool_cost, CostEstimate,
    CostMultipliers,
};
use crate::models::graph::SystemGraph;

/// Days used to project daily cost to a monthly figure (fixed-length month)
const DAYS_PER_MONTH: f64 = 30.0;

/// Aggregated cost model for an entire agent system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemCostSummary {
    pub agents: Vec<CostEstimate>,
    pub tools: Vec<CostEstimate>,
    pub connections: Vec<CostEstimate>,
    /// Total estimated cost per day, USD
    pub total_daily: f64,
    /// Daily cost projected over a fixed 30-day month
    pub total_monthly: f64,
    /// Sum of every component latency - the fully serial worst case
    pub total_latency_ms: u64,
    /// Probability that every component succeeds on one pass through
    /// the system (serial-chain product). The field name is kept for
    /// compatibility with the dashboard read model.
    pub avg_reliability: f64,
}

/// Estimate system cost with baseline multipliers.
pub fn calculate_system_cost(graph: &SystemGraph) -> SystemCostSummary {
    calculate_system_cost_with(graph, &CostMultipliers::default())
}

/// Estimate system cost under scenario multipliers.
///
/// Pure and deterministic: totals depend only on the multiset of
/// entities, not on their order.
pub fn calculate_system_cost_with(
    graph: &SystemGraph,
    multipliers: &CostMultipliers,
) -> SystemCostSummary {
    let agents: Vec<CostEstimate> = graph
        .agents
        .iter()
        .map(|agent| estimate_agent_cost(agent, None, None, None, multipliers))
        .collect();

    let tools: Vec<CostEstimate> = graph
        .tools
        .iter()
        .map(|tool| estimate_tool_cost(tool, None, multipliers))
        .collect();

    let connections: Vec<CostEstimate> = graph
        .relationships
        .iter()
        .map(|connection| estimate_connection_cost(connection, None, multipliers))
        .collect();

    let all = agents.iter().chain(tools.iter()).chain(connections.iter());

    let total_daily: f64 = all.clone().map(|e| e.total_cost).sum();
    let total_latency_ms: u64 = all.clone().map(|e| e.latency_ms.unwrap_or(0)).sum();
    let avg_reliability: f64 = all.map(|e| e.reliability.unwrap_or(1.0)).product();

    SystemCostSummary {
        agents,
        tools,
        connections,
        total_daily,
        total_monthly: total_daily * DAYS_PER_MONTH,
        total_latency_ms,
        avg_reliability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::{AgentSpec, ConnectionSpec, ToolSpec};

    fn sample_graph() -> SystemGraph {
        SystemGraph {
            agents: vec![
                AgentSpec {
                    id: "a1".to_string(),
                    name: "planner".to_string(),
                    model: Some("gpt-4".to_string()),
                    ..Default::default()
                },
                AgentSpec {
                    id: "a2".to_string(),
                    name: "writer".to_string(),
                    model: Some("gemini-flash".to_string()),
                    ..Default::default()
                },
            ],
            tools: vec![ToolSpec {
                id: "t1".to_string(),
                name: "search".to_string(),
                ..Default::default()
            }],
            relationships: vec![ConnectionSpec {
                source: "a1".to_string(),
                target: "a2".to_string(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_empty_graph() {
        let summary = calculate_system_cost(&SystemGraph::default());

        assert_eq!(summary.total_daily, 0.0);
        assert_eq!(summary.total_monthly, 0.0);
        assert_eq!(summary.total_latency_ms, 0);
        assert_eq!(summary.avg_reliability, 1.0);
        assert!(summary.agents.is_empty());
    }

    #[test]
    fn test_totals_are_sums_of_components() {
        let summary = calculate_system_cost(&sample_graph());

        let component_daily: f64 = summary
            .agents
            .iter()
            .chain(&summary.tools)
            .chain(&summary.connections)
            .map(|e| e.total_cost)
            .sum();
        assert!((summary.total_daily - component_daily).abs() < 1e-12);

        // gpt-4 0.27 + gemini-flash 0.000975 + tool 0.0005 + connection 0.0005
        assert!((summary.total_daily - 0.271975).abs() < 1e-9);
        assert!((summary.total_monthly - summary.total_daily * 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_latency_is_serial_sum() {
        let summary = calculate_system_cost(&sample_graph());

        // gpt-4 3000 + gemini-flash 600 + tool 50 + connection 25
        assert_eq!(summary.total_latency_ms, 3675);
    }

    #[test]
    fn test_reliability_is_serial_product() {
        let summary = calculate_system_cost(&sample_graph());

        let expected = 0.95 * 0.95 * 0.98 * 0.99;
        assert!((summary.avg_reliability - expected).abs() < 1e-12);
    }

    #[test]
    fn test_order_independence() {
        let graph = sample_graph();
        let mut reversed = graph.clone();
        reversed.agents.reverse();
        reversed.tools.reverse();
        reversed.relationships.reverse();

        let a = calculate_system_cost(&graph);
        let b = calculate_system_cost(&reversed);

        assert!((a.total_daily - b.total_daily).abs() < 1e-12);
        assert_eq!(a.total_latency_ms, b.total_latency_ms);
        assert!((a.avg_reliability - b.avg_reliability).abs() < 1e-12);
    }

    #[test]
    fn test_multipliers_flow_through() {
        let cheap = calculate_system_cost_with(
            &sample_graph(),
            &CostMultipliers {
                cost_optimization: 2.0,
                ..Default::default()
            },
        );
        let base = calculate_system_cost(&sample_graph());

        assert!((cheap.total_daily - base.total_daily / 2.0).abs() < 1e-12);
    }
}
