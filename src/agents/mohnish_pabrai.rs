//! Mohnish Pabrai - Dhandho investor. Shares ordering rank 6 with peter_lynch.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn mohnish_pabrai_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Mohnish Pabrai")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "mohnish_pabrai".to_string(),
            display_name: "Mohnish Pabrai".to_string(),
            localized_name: "莫尼什·帕伯莱".to_string(),
            description: "Dhandho投资者".to_string(),
            investing_style: "通过基本面分析和安全边际,专注于价值投资和长期增长。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 6,
        },
        handler: Arc::new(mohnish_pabrai_agent),
    }
}
