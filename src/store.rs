//! Dashboard application state
//!
//! Explicit state container with unidirectional updates: the UI layer
//! dispatches actions, `apply` mutates the state and recomputes
//! derived data. Most recent write wins; there are no module-level
//! singletons.

use serde::{Deserialize, Serialize};

use crate::estimate::{calculate_system_cost_with, CostMultipliers, SystemCostSummary};
use crate::models::graph::SystemGraph;
use crate::models::testing::{TestCase, TestResult};
use crate::report::{summarize_results, ReportSummary};

/// State mutation dispatched by the dashboard
#[derive(Debug, Clone)]
pub enum Action {
    /// A repository analysis finished
    GraphAnalyzed(SystemGraph),
    /// Test generation finished
    TestsGenerated(Vec<TestCase>),
    /// A single test run finished
    TestCompleted(TestResult),
    /// Scenario multipliers changed
    MultipliersChanged(CostMultipliers),
    /// Clear everything back to the initial state
    Reset,
}

/// All client-held state for one connected repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub graph: Option<SystemGraph>,
    pub test_cases: Vec<TestCase>,
    pub results: Vec<TestResult>,
    pub multipliers: CostMultipliers,
    /// Derived: recomputed whenever the graph or multipliers change
    pub cost_summary: Option<SystemCostSummary>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single action to the state
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::GraphAnalyzed(graph) => {
                tracing::info!(
                    agents = graph.agents.len(),
                    tools = graph.tools.len(),
                    relationships = graph.relationships.len(),
                    "graph analyzed"
                );
                self.cost_summary = Some(calculate_system_cost_with(&graph, &self.multipliers));
                self.graph = Some(graph);
                self.test_cases.clear();
                self.results.clear();
            }
            Action::TestsGenerated(test_cases) => {
                self.results.clear();
                self.test_cases = test_cases;
            }
            Action::TestCompleted(result) => {
                // Re-running a test replaces its previous result
                self.results.retain(|r| r.test_id != result.test_id);
                self.results.push(result);
            }
            Action::MultipliersChanged(multipliers) => {
                self.multipliers = multipliers;
                if let Some(graph) = &self.graph {
                    self.cost_summary =
                        Some(calculate_system_cost_with(graph, &self.multipliers));
                }
            }
            Action::Reset => *self = Self::default(),
        }
    }

    /// Aggregated report over the results collected so far
    pub fn report(&self) -> ReportSummary {
        summarize_results(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::graph::AgentSpec;
    use crate::models::testing::{TestCategory, TestStatus};

    fn sample_graph() -> SystemGraph {
        SystemGraph {
            agents: vec![AgentSpec {
                id: "a1".to_string(),
                name: "planner".to_string(),
                model: Some("gpt-4".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sample_result(test_id: &str, status: TestStatus) -> TestResult {
        TestResult {
            test_id: test_id.to_string(),
            name: "sample".to_string(),
            category: TestCategory::ToolCalling,
            status,
            duration_ms: Some(50),
            score: None,
            message: None,
        }
    }

    #[test]
    fn test_graph_analyzed_computes_summary() {
        let mut state = DashboardState::new();
        state.apply(Action::GraphAnalyzed(sample_graph()));

        let summary = state.cost_summary.as_ref().unwrap();
        assert!((summary.total_daily - 0.27).abs() < 1e-9);
        assert!(state.graph.is_some());
    }

    #[test]
    fn test_new_analysis_clears_stale_results() {
        let mut state = DashboardState::new();
        state.apply(Action::GraphAnalyzed(sample_graph()));
        state.apply(Action::TestCompleted(sample_result("1", TestStatus::Passed)));

        state.apply(Action::GraphAnalyzed(sample_graph()));
        assert!(state.results.is_empty());
        assert!(state.test_cases.is_empty());
    }

    #[test]
    fn test_rerun_replaces_previous_result() {
        let mut state = DashboardState::new();
        state.apply(Action::TestCompleted(sample_result("1", TestStatus::Failed)));
        state.apply(Action::TestCompleted(sample_result("1", TestStatus::Passed)));

        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].status, TestStatus::Passed);
    }

    #[test]
    fn test_multiplier_change_recomputes_summary() {
        let mut state = DashboardState::new();
        state.apply(Action::GraphAnalyzed(sample_graph()));

        state.apply(Action::MultipliersChanged(CostMultipliers {
            cost_optimization: 2.0,
            ..Default::default()
        }));

        let summary = state.cost_summary.as_ref().unwrap();
        assert!((summary.total_daily - 0.135).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_change_without_graph_is_harmless() {
        let mut state = DashboardState::new();
        state.apply(Action::MultipliersChanged(CostMultipliers {
            speed: 1.5,
            ..Default::default()
        }));

        assert!(state.cost_summary.is_none());
        assert_eq!(state.multipliers.speed, 1.5);
    }

    #[test]
    fn test_reset() {
        let mut state = DashboardState::new();
        state.apply(Action::GraphAnalyzed(sample_graph()));
        state.apply(Action::TestCompleted(sample_result("1", TestStatus::Passed)));

        state.apply(Action::Reset);
        assert!(state.graph.is_none());
        assert!(state.results.is_empty());
        assert!(state.cost_summary.is_none());
    }

    #[test]
    fn test_report_reflects_collected_results() {
        let mut state = DashboardState::new();
        state.apply(Action::TestCompleted(sample_result("1", TestStatus::Passed)));
        state.apply(Action::TestCompleted(sample_result("2", TestStatus::Failed)));

        let report = state.report();
        assert_eq!(report.total_tests, 2);
        assert!((report.pass_rate - 0.5).abs() < 1e-9);
    }
}
