//! Model pricing and latency tables
//!
//! Static lookup of per-model token rates (USD per million tokens) and
//! baseline response latencies. Lookups are total: unrecognized model
//! ids resolve to the fallback entry.

use serde::{Deserialize, Serialize};

/// Token rates and baseline latency for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRates {
    pub model_id: String,
    /// USD per million input tokens
    pub input_per_million: f64,
    /// USD per million output tokens
    pub output_per_million: f64,
    /// Typical single-call response latency in milliseconds
    pub base_latency_ms: f64,
}

/// Model id applied when an agent declares no recognizable model
pub const FALLBACK_MODEL: &str = "gemini-flash";

/// Default rate table, list prices per million tokens
pub fn default_rates() -> Vec<ModelRates> {
    vec![
        rates("gpt-4", 30.0, 60.0, 3000.0),
        rates("gpt-4-turbo", 10.0, 30.0, 2000.0),
        rates("gpt-4o", 2.5, 10.0, 1200.0),
        rates("gpt-4o-mini", 0.15, 0.6, 800.0),
        rates("gpt-3.5-turbo", 0.5, 1.5, 800.0),
        rates("claude-3-opus", 15.0, 75.0, 2600.0),
        rates("claude-3-sonnet", 3.0, 15.0, 1600.0),
        rates("claude-3-haiku", 0.25, 1.25, 700.0),
        rates("gemini-pro", 1.25, 5.0, 1400.0),
        rates("gemini-flash", 0.075, 0.3, 600.0),
    ]
}

fn rates(
    model_id: &str,
    input_per_million: f64,
    output_per_million: f64,
    base_latency_ms: f64,
) -> ModelRates {
    ModelRates {
        model_id: model_id.to_string(),
        input_per_million,
        output_per_million,
        base_latency_ms,
    }
}

/// Find rates for a model id.
///
/// Exact match first; otherwise the longest table id the given id starts
/// with, so deployment-suffixed names like "gpt-4-0613" resolve to their
/// family.
pub fn find_rates(model_id: &str) -> Option<ModelRates> {
    let table = default_rates();
    let lower = model_id.to_lowercase();

    if let Some(exact) = table.iter().find(|r| r.model_id == lower) {
        return Some(exact.clone());
    }

    table
        .into_iter()
        .filter(|r| lower.starts_with(&r.model_id))
        .max_by_key(|r| r.model_id.len())
}

/// Rates applied to unknown models
pub fn fallback_rates() -> ModelRates {
    default_rates()
        .into_iter()
        .find(|r| r.model_id == FALLBACK_MODEL)
        .unwrap()
}

/// Resolve a model id to its rates, falling back for unknown ids
pub fn resolve_rates(model_id: &str) -> ModelRates {
    find_rates(model_id).unwrap_or_else(fallback_rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let rates = find_rates("gpt-4").unwrap();
        assert_eq!(rates.input_per_million, 30.0);
        assert_eq!(rates.output_per_million, 60.0);
    }

    #[test]
    fn test_case_insensitive_match() {
        let rates = find_rates("GPT-4o").unwrap();
        assert_eq!(rates.model_id, "gpt-4o");
    }

    #[test]
    fn test_suffixed_id_resolves_to_family() {
        let rates = find_rates("gpt-4-0613").unwrap();
        assert_eq!(rates.model_id, "gpt-4");

        // Longest family wins over a shorter shared prefix
        let rates = find_rates("gpt-4o-mini-2024-07-18").unwrap();
        assert_eq!(rates.model_id, "gpt-4o-mini");
    }

    #[test]
    fn test_unknown_model_returns_none() {
        assert!(find_rates("foo-bar").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_gemini_flash() {
        let rates = resolve_rates("foo-bar");
        assert_eq!(rates.model_id, FALLBACK_MODEL);
        assert!((rates.input_per_million - 0.075).abs() < 1e-9);
        assert!((rates.output_per_million - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_table_values_are_sane() {
        for rates in default_rates() {
            assert!(rates.input_per_million > 0.0, "{}", rates.model_id);
            assert!(
                rates.output_per_million >= rates.input_per_million,
                "{}",
                rates.model_id
            );
            assert!(rates.base_latency_ms > 0.0, "{}", rates.model_id);
        }
    }
}
