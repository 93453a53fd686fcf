//! Technical Analyst - Chart patterns and price action.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn technical_analyst_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Technical Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "technical_analyst".to_string(),
            display_name: "Technical Analyst".to_string(),
            localized_name: "技术分析师".to_string(),
            description: "图表形态专家".to_string(),
            investing_style: "专注于图表形态和市场趋势来做出投资决策,经常使用技术指标和价格行为分析。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 11,
        },
        handler: Arc::new(technical_analyst_agent),
    }
}
