// 📇 Analyst Registry - Static persona table + derived views
//
// Single source of truth for analyst personas:
// - Who exists (key → metadata + agent handler)
// - In what order they are presented (rank)
// - How the pipeline builder addresses them (node bindings)
//
// The registry is built once at startup and never mutated afterwards.
// Every derived view returns a fresh collection; concurrent readers
// need no locking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::agents::{AgentTask, AgentVerdict};

// ============================================================================
// AGENT HANDLER
// ============================================================================

/// Opaque analyst procedure. The registry never invokes it, only forwards it
/// to the pipeline builder via `node_bindings`.
pub type AgentFn = Arc<dyn Fn(&AgentTask) -> AgentVerdict + Send + Sync>;

// ============================================================================
// CATEGORY
// ============================================================================

/// Kind of registry entry. Currently every entry is an analyst; the open
/// variant leaves room for non-analyst entries without touching call sites
/// that only match on `Analyst`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalystCategory {
    Analyst,
    Other(String),
}

impl AnalystCategory {
    pub fn as_str(&self) -> &str {
        match self {
            AnalystCategory::Analyst => "analyst",
            AnalystCategory::Other(tag) => tag,
        }
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// Display metadata for one analyst persona. Pure data, safe to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystMeta {
    /// Unique key, stable across releases. Also the prefix for the
    /// generated pipeline node name.
    pub key: String,

    /// Human-readable English name
    pub display_name: String,

    /// Human-readable Chinese name
    pub localized_name: String,

    /// Short tagline
    pub description: String,

    /// Longer description of the persona's investing approach
    pub investing_style: String,

    /// Entry kind (currently always `Analyst`)
    pub category: AnalystCategory,

    /// Presentation/processing order. Not an identity: ranks may repeat;
    /// ties break by key lexicographic order.
    pub rank: i32,
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// What each persona module exposes: its metadata plus its handler.
///
/// Assembling the registry from explicit specs keeps the table free of
/// import-order coupling - a module that is not registered is simply absent,
/// and a module registered twice is a hard error.
#[derive(Clone)]
pub struct AnalystSpec {
    pub meta: AnalystMeta,
    pub handler: AgentFn,
}

/// One entry of the built registry.
#[derive(Clone)]
pub struct AnalystRecord {
    pub meta: AnalystMeta,
    pub handler: AgentFn,
}

impl fmt::Debug for AnalystRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalystRecord")
            .field("meta", &self.meta)
            .field("handler", &"<agent fn>")
            .finish()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Registry failures. `DuplicateKey` and `MissingAgent` belong to the
/// startup phase and are fatal - a partial registry is never exposed.
/// `UnknownAnalyst` is a lookup miss, a client-input error for callers
/// at the API boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("analyst key registered twice: {key}")]
    DuplicateKey { key: String },

    #[error("no agent handler bound for analyst: {key}")]
    MissingAgent { key: String },

    #[error("unknown analyst: {key}")]
    UnknownAnalyst { key: String },
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects analyst specs, then freezes them into an `AnalystRegistry`.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, AnalystRecord>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one persona. Rejects duplicate keys.
    pub fn register(&mut self, spec: AnalystSpec) -> Result<(), RegistryError> {
        let key = spec.meta.key.clone();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateKey { key });
        }
        self.entries.insert(
            key,
            AnalystRecord {
                meta: spec.meta,
                handler: spec.handler,
            },
        );
        Ok(())
    }

    /// Freeze the table. After this point the registry is immutable.
    pub fn build(self) -> AnalystRegistry {
        tracing::info!(analysts = self.entries.len(), "analyst registry built");
        AnalystRegistry {
            entries: self.entries,
        }
    }
}

// ============================================================================
// API PROJECTION
// ============================================================================

/// Serializable projection of one analyst for the listing endpoint.
///
/// Deliberately omits the agent handler: callables never cross an external
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub key: String,
    pub display_name: String,
    pub localized_name: String,
    pub description: String,
    pub investing_style: String,
    pub rank: i32,
}

impl From<&AnalystMeta> for AgentInfo {
    fn from(meta: &AnalystMeta) -> Self {
        AgentInfo {
            key: meta.key.clone(),
            display_name: meta.display_name.clone(),
            localized_name: meta.localized_name.clone(),
            description: meta.description.clone(),
            investing_style: meta.investing_style.clone(),
            rank: meta.rank,
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Immutable analyst table.
///
/// All accessors are pure: they allocate fresh output and leave the table
/// untouched, so the registry can be shared across threads behind an `Arc`
/// with no locking.
pub struct AnalystRegistry {
    entries: HashMap<String, AnalystRecord>,
}

impl AnalystRegistry {
    /// Build a registry from a metadata table plus separately supplied
    /// handlers, one per key. This is the bridge for hosts that obtain the
    /// callables from independently initialized modules: a metadata entry
    /// without a handler fails fast, naming the key, before any traffic
    /// is served.
    pub fn from_parts(
        metas: Vec<AnalystMeta>,
        handlers: &HashMap<String, AgentFn>,
    ) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for meta in metas {
            let handler = handlers
                .get(&meta.key)
                .ok_or_else(|| RegistryError::MissingAgent {
                    key: meta.key.clone(),
                })?
                .clone();
            builder.register(AnalystSpec { meta, handler })?;
        }
        Ok(builder.build())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up one analyst by key.
    pub fn get(&self, key: &str) -> Result<&AnalystRecord, RegistryError> {
        self.entries
            .get(key)
            .ok_or_else(|| RegistryError::UnknownAnalyst {
                key: key.to_string(),
            })
    }

    /// All `(display_name, key)` pairs, ascending by rank.
    ///
    /// Ranks are not required to be unique; ties break by key
    /// lexicographic order so the result is deterministic.
    pub fn ordered(&self) -> Vec<(String, String)> {
        self.sorted_records()
            .iter()
            .map(|r| (r.meta.display_name.clone(), r.meta.key.clone()))
            .collect()
    }

    fn sorted_records(&self) -> Vec<&AnalystRecord> {
        let mut records: Vec<&AnalystRecord> = self.entries.values().collect();
        records.sort_by(|a, b| {
            a.meta
                .rank
                .cmp(&b.meta.rank)
                .then_with(|| a.meta.key.cmp(&b.meta.key))
        });
        records
    }

    /// Map of key → `(node_name, handler)` for the pipeline graph builder:
    /// one node per analyst, named `"<key>_agent"`. The key set of the
    /// result always equals the registry's key set.
    pub fn node_bindings(&self) -> HashMap<String, (String, AgentFn)> {
        self.entries
            .iter()
            .map(|(key, record)| {
                (
                    key.clone(),
                    (format!("{}_agent", key), record.handler.clone()),
                )
            })
            .collect()
    }

    /// Serializable analyst list for the HTTP layer, same order as
    /// `ordered()`.
    pub fn api_list(&self) -> Vec<AgentInfo> {
        self.sorted_records()
            .iter()
            .map(|r| AgentInfo::from(&r.meta))
            .collect()
    }
}

impl fmt::Debug for AnalystRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalystRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(key: &str, display_name: &str, rank: i32) -> AnalystMeta {
        AnalystMeta {
            key: key.to_string(),
            display_name: display_name.to_string(),
            localized_name: format!("{}-zh", display_name),
            description: "test persona".to_string(),
            investing_style: "test style".to_string(),
            category: AnalystCategory::Analyst,
            rank,
        }
    }

    fn spec(key: &str, display_name: &str, rank: i32) -> AnalystSpec {
        let label = display_name.to_string();
        AnalystSpec {
            meta: meta(key, display_name, rank),
            handler: Arc::new(move |_task| AgentVerdict::abstain(&label)),
        }
    }

    fn tie_break_registry() -> AnalystRegistry {
        let mut builder = RegistryBuilder::new();
        builder.register(spec("b", "Analyst B", 1)).unwrap();
        builder.register(spec("c", "Analyst C", 1)).unwrap();
        builder.register(spec("a", "Analyst A", 0)).unwrap();
        builder.build()
    }

    #[test]
    fn test_ordered_sorts_by_rank_then_key() {
        let registry = tie_break_registry();
        let ordered = registry.ordered();

        assert_eq!(ordered.len(), registry.len());
        // Rank 0 first, then the rank-1 tie broken by key: b before c
        let keys: Vec<&str> = ordered.iter().map(|(_, k)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        // Ranks non-decreasing across the sequence
        let ranks: Vec<i32> = ordered
            .iter()
            .map(|(_, k)| registry.get(k).unwrap().meta.rank)
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ordered_is_idempotent() {
        let registry = tie_break_registry();
        assert_eq!(registry.ordered(), registry.ordered());
        assert_eq!(registry.api_list(), registry.api_list());
    }

    #[test]
    fn test_node_bindings_cover_every_key() {
        let registry = tie_break_registry();
        let bindings = registry.node_bindings();

        assert_eq!(bindings.len(), registry.len());
        for key in ["a", "b", "c"] {
            let (node_name, _handler) = bindings.get(key).expect("binding missing");
            assert_eq!(node_name, &format!("{}_agent", key));
        }
    }

    #[test]
    fn test_api_list_has_no_callables() {
        let registry = tie_break_registry();
        let json = serde_json::to_value(registry.api_list()).unwrap();

        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 3);
        for entry in list {
            let obj = entry.as_object().unwrap();
            // Exactly the serializable fields, nothing handler-shaped
            let mut fields: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
            fields.sort_unstable();
            assert_eq!(
                fields,
                vec![
                    "description",
                    "display_name",
                    "investing_style",
                    "key",
                    "localized_name",
                    "rank",
                ]
            );
        }
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register(spec("a", "Analyst A", 0)).unwrap();

        let err = builder.register(spec("a", "Analyst A again", 5)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                key: "a".to_string()
            }
        );
    }

    #[test]
    fn test_from_parts_fails_fast_on_missing_handler() {
        let handler: AgentFn = Arc::new(|_task| AgentVerdict::abstain("A"));
        let mut handlers: HashMap<String, AgentFn> = HashMap::new();
        handlers.insert("a".to_string(), handler);

        let metas = vec![meta("a", "Analyst A", 0), meta("b", "Analyst B", 1)];
        let err = AnalystRegistry::from_parts(metas, &handlers).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingAgent {
                key: "b".to_string()
            }
        );
    }

    #[test]
    fn test_get_unknown_key() {
        let registry = tie_break_registry();
        let err = registry.get("nobody").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownAnalyst {
                key: "nobody".to_string()
            }
        );
    }
}
