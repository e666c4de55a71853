//! Test case and result data types
//!
//! Mirrors the JSON the test-generation and test-execution endpoints
//! exchange with the dashboard.

use serde::{Deserialize, Serialize};

/// Category of a generated test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    Hyperparameter,
    PromptInjection,
    ToolCalling,
    Relationship,
    Collaborative,
    ErrorHandling,
    OutputQuality,
    Performance,
    EdgeCase,
    Security,
}

impl TestCategory {
    /// Every category, in report display order
    pub const ALL: [TestCategory; 10] = [
        TestCategory::Hyperparameter,
        TestCategory::PromptInjection,
        TestCategory::ToolCalling,
        TestCategory::Relationship,
        TestCategory::Collaborative,
        TestCategory::ErrorHandling,
        TestCategory::OutputQuality,
        TestCategory::Performance,
        TestCategory::EdgeCase,
        TestCategory::Security,
    ];

    /// Human-readable label for report display
    pub fn label(&self) -> &'static str {
        match self {
            TestCategory::Hyperparameter => "Hyperparameter",
            TestCategory::PromptInjection => "Prompt Injection",
            TestCategory::ToolCalling => "Tool Calling",
            TestCategory::Relationship => "Relationship",
            TestCategory::Collaborative => "Collaborative",
            TestCategory::ErrorHandling => "Error Handling",
            TestCategory::OutputQuality => "Output Quality",
            TestCategory::Performance => "Performance",
            TestCategory::EdgeCase => "Edge Case",
            TestCategory::Security => "Security",
        }
    }
}

/// Outcome status of a single test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Warning,
}

/// A generated test case, not yet run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub category: TestCategory,
    pub description: Option<String>,
    /// Id of the agent, tool, or relationship under test
    pub target_id: Option<String>,
    /// Input payload forwarded to the simulated run
    pub input: Option<serde_json::Value>,
    pub expected_behavior: Option<String>,
}

/// Result of running a single test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub test_id: String,
    pub name: String,
    pub category: TestCategory,
    pub status: TestStatus,
    pub duration_ms: Option<u64>,
    /// 0-100 score when the test produces one
    pub score: Option<f64>,
    pub message: Option<String>,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}
