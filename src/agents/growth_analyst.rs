//! Growth Analyst - Growth trends and valuation.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn growth_analyst_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Growth Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "growth_analyst".to_string(),
            display_name: "Growth Analyst".to_string(),
            localized_name: "成长分析师".to_string(),
            description: "成长专家".to_string(),
            investing_style: "通过成长分析来分析增长趋势和估值,识别增长机会。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 13,
        },
        handler: Arc::new(growth_analyst_agent),
    }
}
