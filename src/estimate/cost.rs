//! Per-entity cost estimation
//!
//! Computes cost/latency/reliability estimates for a single agent,
//! tool, or connection under a set of scenario multipliers.

use serde::{Deserialize, Serialize};

use super::pricing::{fallback_rates, find_rates, ModelRates, FALLBACK_MODEL};
use super::tokens::estimate_tokens;
use crate::models::graph::{AgentSpec, ConnectionSpec, ToolSpec};

/// Scenario multipliers adjusting the baseline assumptions.
///
/// Each scalar is positive, typically in [0.5, 1.5]. All 1.0
/// reproduces the baseline formulas exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostMultipliers {
    /// Scales token consumption and model latency per call
    pub reasoning: f64,
    /// Scales invocation frequency
    pub accuracy: f64,
    /// Divides realized cost; higher optimization means cheaper
    pub cost_optimization: f64,
    /// Scales invocation frequency up and latency down
    pub speed: f64,
}

impl Default for CostMultipliers {
    fn default() -> Self {
        Self {
            reasoning: 1.0,
            accuracy: 1.0,
            cost_optimization: 1.0,
            speed: 1.0,
        }
    }
}

/// Cost/latency/reliability estimate for a single entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Estimated input tokens per call, rounded
    pub input_tokens: u64,
    /// Estimated output tokens per call, rounded
    pub output_tokens: u64,
    /// Daily cost in USD, full precision (display formatting rounds)
    pub total_cost: f64,
    /// Model name the estimate was priced for, or an execution label
    /// for non-model entities
    pub model: String,
    /// Estimated invocations per day, rounded
    pub api_calls: u64,
    pub latency_ms: Option<u64>,
    /// Success probability in [0, 1]
    pub reliability: Option<f64>,
}

// Baseline assumptions for agents
const DEFAULT_INPUT_TOKENS: f64 = 500.0;
const DEFAULT_OUTPUT_TOKENS: f64 = 200.0;
const DEFAULT_AGENT_CALLS_PER_DAY: f64 = 10.0;
const DEFAULT_AGENT_RELIABILITY: f64 = 0.95;

// Baseline assumptions for tools
const TOOL_COST_PER_CALL: f64 = 0.0001;
const DEFAULT_TOOL_CALLS_PER_DAY: f64 = 5.0;
const TOOL_BASE_LATENCY_MS: f64 = 50.0;
const TOOL_COMPLEXITY_STEP_MS: f64 = 20.0;
const TOOL_MAX_COMPLEXITY: f64 = 10.0;
const DEFAULT_TOOL_RELIABILITY: f64 = 0.98;
const TOOL_MODEL_LABEL: &str = "tool-execution";

// Baseline assumptions for connections
const CONNECTION_COST_PER_CALL: f64 = 0.00005;
const DEFAULT_CONNECTION_CALLS_PER_DAY: f64 = 10.0;
const CONNECTION_BASE_LATENCY_MS: f64 = 20.0;
const CONNECTION_MS_PER_KB: f64 = 0.5;
const DEFAULT_DATA_VOLUME_KB: f64 = 10.0;
const DEFAULT_CONNECTION_RELIABILITY: f64 = 0.99;
const CONNECTION_MODEL_LABEL: &str = "data-transfer";

/// Resolve the model an agent runs on.
///
/// Candidates are checked in priority order; the first one present in
/// the rate table wins. When none matches, the first declared name is
/// kept for display but priced at the fallback rates.
fn resolve_agent_model(agent: &AgentSpec) -> (String, ModelRates) {
    for candidate in agent.model_candidates() {
        if let Some(rates) = find_rates(candidate) {
            return (candidate.to_string(), rates);
        }
    }

    let name = agent
        .model_candidates()
        .next()
        .unwrap_or(FALLBACK_MODEL)
        .to_string();
    (name, fallback_rates())
}

/// Estimate daily cost for an agent.
///
/// Overrides default to 500 input / 200 output tokens and 10 calls per
/// day when not supplied. Prompt tokens estimated from the agent's
/// instruction text are added on top of the input average.
pub fn estimate_agent_cost(
    agent: &AgentSpec,
    avg_input_tokens: Option<f64>,
    avg_output_tokens: Option<f64>,
    calls_per_day: Option<f64>,
    multipliers: &CostMultipliers,
) -> CostEstimate {
    let (model, rates) = resolve_agent_model(agent);

    let prompt_tokens = agent.prompt_text().map(estimate_tokens).unwrap_or(0) as f64;

    let input_tokens = (avg_input_tokens.unwrap_or(DEFAULT_INPUT_TOKENS) + prompt_tokens)
        * multipliers.reasoning;
    let output_tokens = avg_output_tokens.unwrap_or(DEFAULT_OUTPUT_TOKENS) * multipliers.reasoning;

    let per_call_cost = input_tokens * rates.input_per_million / 1_000_000.0
        + output_tokens * rates.output_per_million / 1_000_000.0;

    let calls = calls_per_day.unwrap_or(DEFAULT_AGENT_CALLS_PER_DAY)
        * multipliers.accuracy
        * multipliers.speed;

    let total_cost = per_call_cost * calls / multipliers.cost_optimization;

    let latency_ms = (rates.base_latency_ms * multipliers.reasoning / multipliers.speed).round();

    let reliability = agent
        .metrics
        .as_ref()
        .and_then(|m| m.reliability)
        .unwrap_or(DEFAULT_AGENT_RELIABILITY);

    CostEstimate {
        input_tokens: input_tokens.round() as u64,
        output_tokens: output_tokens.round() as u64,
        total_cost,
        model,
        api_calls: calls.round() as u64,
        latency_ms: Some(latency_ms as u64),
        reliability: Some(reliability),
    }
}

/// Estimate daily cost for a tool.
///
/// Tools carry a fixed per-call execution cost and no token traffic.
/// Latency grows with code size: each 100 bytes of implementation adds
/// one complexity unit, capped at 10. An explicit latency metric takes
/// precedence over the derived value.
pub fn estimate_tool_cost(
    tool: &ToolSpec,
    calls_per_day: Option<f64>,
    multipliers: &CostMultipliers,
) -> CostEstimate {
    let calls = calls_per_day.unwrap_or(DEFAULT_TOOL_CALLS_PER_DAY)
        * multipliers.accuracy
        * multipliers.speed;

    let total_cost = TOOL_COST_PER_CALL * calls / multipliers.cost_optimization;

    let latency_ms = match tool.metrics.as_ref().and_then(|m| m.latency_ms) {
        Some(measured) => measured,
        None => {
            let complexity = (tool.code_len() as f64 / 100.0).min(TOOL_MAX_COMPLEXITY);
            (TOOL_BASE_LATENCY_MS + complexity * TOOL_COMPLEXITY_STEP_MS) / multipliers.speed
        }
    };

    let reliability = tool
        .metrics
        .as_ref()
        .and_then(|m| m.reliability)
        .unwrap_or(DEFAULT_TOOL_RELIABILITY);

    CostEstimate {
        input_tokens: 0,
        output_tokens: 0,
        total_cost,
        model: TOOL_MODEL_LABEL.to_string(),
        api_calls: calls.round() as u64,
        latency_ms: Some(latency_ms.round() as u64),
        reliability: Some(reliability),
    }
}

/// Estimate daily cost for a connection between agents.
///
/// Connections carry a fixed per-call transfer cost. Latency scales
/// with the payload volume; input tokens reflect the size of the
/// described data flow.
pub fn estimate_connection_cost(
    connection: &ConnectionSpec,
    calls_per_day: Option<f64>,
    multipliers: &CostMultipliers,
) -> CostEstimate {
    let calls = calls_per_day.unwrap_or(DEFAULT_CONNECTION_CALLS_PER_DAY)
        * multipliers.accuracy
        * multipliers.speed;

    let total_cost = CONNECTION_COST_PER_CALL * calls / multipliers.cost_optimization;

    let latency_ms = match connection.metrics.as_ref().and_then(|m| m.latency_ms) {
        Some(measured) => measured,
        None => {
            let data_kb = connection.data_kb.unwrap_or(DEFAULT_DATA_VOLUME_KB);
            CONNECTION_BASE_LATENCY_MS + data_kb * CONNECTION_MS_PER_KB
        }
    };

    let input_tokens = connection
        .data_flow
        .as_deref()
        .map(estimate_tokens)
        .unwrap_or(0);

    let reliability = connection
        .metrics
        .as_ref()
        .and_then(|m| m.reliability)
        .unwrap_or(DEFAULT_CONNECTION_RELIABILITY);

    CostEstimate {
        input_tokens,
        output_tokens: 0,
        total_cost,
        model: CONNECTION_MODEL_LABEL.to_string(),
        api_calls: calls.round() as u64,
        latency_ms: Some(latency_ms.round() as u64),
        reliability: Some(reliability),
    }
}
