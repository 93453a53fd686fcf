//! Aswath Damodaran - The dean of valuation.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn aswath_damodaran_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Aswath Damodaran")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "aswath_damodaran".to_string(),
            display_name: "Aswath Damodaran".to_string(),
            localized_name: "阿斯沃斯·达莫达兰".to_string(),
            description: "估值大师".to_string(),
            investing_style: "专注于通过严格的估值分析来评估内在价值和财务指标,以发现投资机会。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 0,
        },
        handler: Arc::new(aswath_damodaran_agent),
    }
}
