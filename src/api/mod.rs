//! REST client for the analysis/testing backend
//!
//! Thin typed wrappers over the backend HTTP endpoints. The backend
//! performs repository analysis, test generation, and simulated test
//! execution; this crate consumes its JSON and never re-implements
//! the analysis itself.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::debug;

use crate::models::graph::{AgentSpec, SystemGraph};
use crate::models::testing::{TestCase, TestResult};

/// Errors surfaced by the backend client
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },
}

/// Error body the backend returns with 4xx/5xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Request body for repository analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRepoRequest {
    pub repo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct RunTestRequest<'a> {
    test_case: &'a TestCase,
    agent_data: &'a SystemGraph,
}

/// Request body for applying a suggested fix to an agent
#[derive(Debug, Clone, Serialize)]
pub struct ApplyFixRequest {
    pub agent_id: String,
    pub fix: String,
}

/// Acknowledgement body for write endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateTestsResponse {
    test_cases: Vec<TestCase>,
}

/// Typed async client for the backend REST API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "backend request");

        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Analyze a GitHub repository into an agent graph
    pub async fn analyze_repo(&self, request: &AnalyzeRepoRequest) -> Result<SystemGraph, ApiError> {
        self.post_json("/api/analyze-repo", request).await
    }

    /// Generate test cases for an analyzed graph
    pub async fn generate_tests(&self, graph: &SystemGraph) -> Result<Vec<TestCase>, ApiError> {
        let response: GenerateTestsResponse = self.post_json("/api/generate-tests", graph).await?;
        Ok(response.test_cases)
    }

    /// Run a single simulated test
    pub async fn run_test(
        &self,
        test_case: &TestCase,
        graph: &SystemGraph,
    ) -> Result<TestResult, ApiError> {
        self.post_json(
            "/api/run-test",
            &RunTestRequest {
                test_case,
                agent_data: graph,
            },
        )
        .await
    }

    /// Run every test case concurrently, failing fast on the first error
    pub async fn run_all_tests(
        &self,
        test_cases: &[TestCase],
        graph: &SystemGraph,
    ) -> Result<Vec<TestResult>, ApiError> {
        let runs = test_cases.iter().map(|test_case| self.run_test(test_case, graph));
        futures::future::try_join_all(runs).await
    }

    /// Apply a suggested fix to an agent definition
    pub async fn apply_fix(&self, request: &ApplyFixRequest) -> Result<AckResponse, ApiError> {
        self.post_json("/api/apply-fix", request).await
    }

    /// Push an edited agent definition back to the backend
    pub async fn update_agent(&self, agent: &AgentSpec) -> Result<AckResponse, ApiError> {
        self.post_json("/api/update-agent", agent).await
    }

    /// Backend liveness probe
    pub async fn health(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(
            client.url("/api/analyze-repo"),
            "http://localhost:5000/api/analyze-repo"
        );
    }

    #[test]
    fn test_analyze_request_omits_absent_token() {
        let request = AnalyzeRepoRequest {
            repo_url: "https://github.com/acme/agents".to_string(),
            github_token: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("repo_url"));
        assert!(!json.contains("github_token"));
    }

    #[test]
    fn test_error_body_parses_backend_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "repo not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("repo not found"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn test_health_false_when_unreachable() {
        // Port 1 is never listening locally
        let client = ApiClient::new("http://127.0.0.1:1");
        assert!(!client.health().await);
    }
}
