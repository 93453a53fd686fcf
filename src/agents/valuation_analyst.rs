//! Valuation Analyst - Fair-value modeling.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn valuation_analyst_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Valuation Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "valuation_analyst".to_string(),
            display_name: "Valuation Analyst".to_string(),
            localized_name: "估值分析师".to_string(),
            description: "公司估值专家".to_string(),
            investing_style: "专注于确定公司的公允价值,使用各种估值模型和财务指标进行投资决策。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 16,
        },
        handler: Arc::new(valuation_analyst_agent),
    }
}
