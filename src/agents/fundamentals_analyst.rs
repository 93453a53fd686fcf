//! Fundamentals Analyst - Financial statements specialist.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn fundamentals_analyst_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Fundamentals Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "fundamentals_analyst".to_string(),
            display_name: "Fundamentals Analyst".to_string(),
            localized_name: "基本面分析师".to_string(),
            description: "财务报表专家".to_string(),
            investing_style: "深入研究财务报表和经济指标,通过基本面分析评估公司的内在价值。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 12,
        },
        handler: Arc::new(fundamentals_analyst_agent),
    }
}
