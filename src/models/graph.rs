//! Agent graph data types
//!
//! Types representing the agent/tool/relationship graph the analysis
//! backend extracts from a connected repository.

use serde::{Deserialize, Serialize};

/// Model settings nested inside an agent definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Measured metrics supplied with an entity, when the backend has them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMetrics {
    /// Observed success probability in [0, 1]
    pub reliability: Option<f64>,
    /// Observed latency in milliseconds
    pub latency_ms: Option<f64>,
}

/// An LLM-driven agent extracted from the analyzed repository
///
/// Every field beyond id/name is optional: the extraction is best-effort
/// and downstream consumers substitute defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
    pub file_path: Option<String>,
    /// System prompt or instruction template
    pub prompt: Option<String>,
    pub system_instruction: Option<String>,
    /// Model name when declared directly on the agent
    pub model: Option<String>,
    pub config: Option<ModelConfig>,
    pub model_config: Option<ModelConfig>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub objective: Option<String>,
    pub code_snippet: Option<String>,
    pub metrics: Option<EntityMetrics>,
}

impl AgentSpec {
    /// Prompt text used for token estimation (prompt first, then system_instruction)
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .or(self.system_instruction.as_deref())
    }

    /// Model name candidates in resolution priority order
    pub fn model_candidates(&self) -> impl Iterator<Item = &str> {
        self.model
            .as_deref()
            .into_iter()
            .chain(self.config.as_ref().and_then(|c| c.model.as_deref()))
            .chain(self.model_config.as_ref().and_then(|c| c.model.as_deref()))
    }
}

/// A callable tool extracted from the analyzed repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolSpec {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub code_snippet: Option<String>,
    pub metrics: Option<EntityMetrics>,
}

impl ToolSpec {
    /// Length of the extracted implementation, used as a complexity proxy
    pub fn code_len(&self) -> usize {
        self.code_snippet.as_deref().map(str::len).unwrap_or(0)
    }
}

/// A data/control link between two agents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub connection_type: Option<String>,
    /// Description of the data exchanged over the link
    pub data_flow: Option<String>,
    /// Typical payload size in kilobytes
    pub data_kb: Option<f64>,
    pub metrics: Option<EntityMetrics>,
}

/// The full analyzed system graph
///
/// Collections default to empty so a partial backend response still
/// deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemGraph {
    #[serde(default)]
    pub agents: Vec<AgentSpec>,
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
    #[serde(default)]
    pub relationships: Vec<ConnectionSpec>,
}

impl SystemGraph {
    /// Whether the graph has no entities at all
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.tools.is_empty() && self.relationships.is_empty()
    }

    /// Total entity count across all three collections
    pub fn entity_count(&self) -> usize {
        self.agents.len() + self.tools.len() + self.relationships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_deserializes_with_missing_collections() {
        let graph: SystemGraph = serde_json::from_str(r#"{"agents": []}"#).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.entity_count(), 0);
    }

    #[test]
    fn test_agent_deserializes_with_minimal_fields() {
        let agent: AgentSpec =
            serde_json::from_str(r#"{"id": "a1", "name": "researcher"}"#).unwrap();
        assert_eq!(agent.id, "a1");
        assert!(agent.model.is_none());
        assert!(agent.tools.is_empty());
        assert!(agent.prompt_text().is_none());
    }

    #[test]
    fn test_model_candidates_priority_order() {
        let agent = AgentSpec {
            model: Some("gpt-4".to_string()),
            config: Some(ModelConfig {
                model: Some("gpt-3.5-turbo".to_string()),
                ..Default::default()
            }),
            model_config: Some(ModelConfig {
                model: Some("gemini-pro".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let candidates: Vec<&str> = agent.model_candidates().collect();
        assert_eq!(candidates, vec!["gpt-4", "gpt-3.5-turbo", "gemini-pro"]);
    }

    #[test]
    fn test_model_candidates_skip_absent_fields() {
        let agent = AgentSpec {
            model_config: Some(ModelConfig {
                model: Some("claude-3-haiku".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let candidates: Vec<&str> = agent.model_candidates().collect();
        assert_eq!(candidates, vec!["claude-3-haiku"]);
    }

    #[test]
    fn test_prompt_text_fallback() {
        let agent = AgentSpec {
            system_instruction: Some("be helpful".to_string()),
            ..Default::default()
        };
        assert_eq!(agent.prompt_text(), Some("be helpful"));

        let agent = AgentSpec {
            prompt: Some("primary".to_string()),
            system_instruction: Some("secondary".to_string()),
            ..Default::default()
        };
        assert_eq!(agent.prompt_text(), Some("primary"));
    }

    #[test]
    fn test_tool_code_len() {
        let tool = ToolSpec {
            code_snippet: Some("def run():\n    pass".to_string()),
            ..Default::default()
        };
        assert_eq!(tool.code_len(), 19);

        assert_eq!(ToolSpec::default().code_len(), 0);
    }

    #[test]
    fn test_connection_type_field_rename() {
        let conn: ConnectionSpec = serde_json::from_str(
            r#"{"source": "a1", "target": "a2", "type": "delegation"}"#,
        )
        .unwrap();
        assert_eq!(conn.connection_type.as_deref(), Some("delegation"));
    }
}
