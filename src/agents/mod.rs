// 🧑‍💼 Analyst Personas - registration modules
//
// One module per persona. Each exposes:
// - its decision procedure (`<key>_agent`)
// - a `spec()` returning metadata + handler for registration
//
// `default_registry()` assembles the full immutable table through the
// builder. Registration is explicit: adding a persona means adding its
// module to `all_specs`, nothing is wired implicitly.
//
// The handlers shipped here abstain: the model-backed scoring for each
// persona runs in the host pipeline, which binds its own implementations
// through the same `AnalystSpec` interface. The abstaining bodies keep the
// registry, node bindings, and CLI exercisable without a model backend.

use serde::{Deserialize, Serialize};

use crate::analysts::{AnalystRegistry, AnalystSpec, RegistryBuilder, RegistryError};

pub mod aswath_damodaran;
pub mod ben_graham;
pub mod bill_ackman;
pub mod cathie_wood;
pub mod charlie_munger;
pub mod fundamentals_analyst;
pub mod growth_analyst;
pub mod michael_burry;
pub mod mohnish_pabrai;
pub mod news_sentiment_analyst;
pub mod peter_lynch;
pub mod phil_fisher;
pub mod rakesh_jhunjhunwala;
pub mod sentiment_analyst;
pub mod stanley_druckenmiller;
pub mod technical_analyst;
pub mod valuation_analyst;
pub mod warren_buffett;

// ============================================================================
// HANDLER SIGNATURE
// ============================================================================

/// Input handed to every analyst procedure by the pipeline builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTask {
    /// Ticker symbol under analysis
    pub ticker: String,
}

impl AgentTask {
    pub fn new(ticker: impl Into<String>) -> Self {
        AgentTask {
            ticker: ticker.into(),
        }
    }
}

/// Direction of an analyst's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Bullish => "bullish",
            Signal::Bearish => "bearish",
            Signal::Neutral => "neutral",
        }
    }
}

/// Output of one analyst procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentVerdict {
    pub analyst: String,
    pub signal: Signal,
    pub confidence: f64,
    pub reasoning: String,
}

impl AgentVerdict {
    /// Neutral verdict with zero confidence, used when no scoring backend
    /// is bound.
    pub fn abstain(analyst: &str) -> Self {
        AgentVerdict {
            analyst: analyst.to_string(),
            signal: Signal::Neutral,
            confidence: 0.0,
            reasoning: format!("{}: no scoring backend bound, abstaining", analyst),
        }
    }
}

// ============================================================================
// DEFAULT REGISTRY
// ============================================================================

/// Specs for every shipped persona, one per module.
pub fn all_specs() -> Vec<AnalystSpec> {
    vec![
        aswath_damodaran::spec(),
        ben_graham::spec(),
        bill_ackman::spec(),
        cathie_wood::spec(),
        charlie_munger::spec(),
        michael_burry::spec(),
        mohnish_pabrai::spec(),
        peter_lynch::spec(),
        phil_fisher::spec(),
        rakesh_jhunjhunwala::spec(),
        stanley_druckenmiller::spec(),
        warren_buffett::spec(),
        technical_analyst::spec(),
        fundamentals_analyst::spec(),
        growth_analyst::spec(),
        news_sentiment_analyst::spec(),
        sentiment_analyst::spec(),
        valuation_analyst::spec(),
    ]
}

/// Build the immutable registry from all shipped personas.
///
/// Any failure here is fatal to startup: callers must not serve traffic
/// with a partial table.
pub fn default_registry() -> Result<AnalystRegistry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    for spec in all_specs() {
        builder.register(spec)?;
    }
    Ok(builder.build())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_all_personas() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 18);
        assert!(registry.contains("warren_buffett"));
        assert!(registry.contains("valuation_analyst"));
    }

    #[test]
    fn test_ordered_starts_with_damodaran() {
        let registry = default_registry().unwrap();
        let ordered = registry.ordered();

        assert_eq!(ordered.len(), 18);
        assert_eq!(ordered[0].1, "aswath_damodaran");
        assert_eq!(ordered[0].0, "Aswath Damodaran");
    }

    #[test]
    fn test_shared_rank_tie_break() {
        // mohnish_pabrai and peter_lynch both carry rank 6. Ties break
        // by key, so mohnish_pabrai comes first.
        let registry = default_registry().unwrap();
        let keys: Vec<String> = registry.ordered().into_iter().map(|(_, k)| k).collect();

        let pabrai = keys.iter().position(|k| k == "mohnish_pabrai").unwrap();
        let lynch = keys.iter().position(|k| k == "peter_lynch").unwrap();
        assert_eq!(lynch, pabrai + 1);
    }

    #[test]
    fn test_node_bindings_match_registry() {
        let registry = default_registry().unwrap();
        let bindings = registry.node_bindings();

        assert_eq!(bindings.len(), registry.len());
        let (node_name, handler) = &bindings["warren_buffett"];
        assert_eq!(node_name, "warren_buffett_agent");

        let verdict = handler(&AgentTask::new("AAPL"));
        assert_eq!(verdict.signal, Signal::Neutral);
        assert_eq!(verdict.analyst, "Warren Buffett");
    }

    #[test]
    fn test_api_list_round_trips_as_json() {
        let registry = default_registry().unwrap();
        let json = serde_json::to_string(&registry.api_list()).unwrap();
        assert!(json.contains("\"warren_buffett\""));
        assert!(json.contains("沃伦·巴菲特"));
        assert!(!json.contains("handler"));
    }
}
