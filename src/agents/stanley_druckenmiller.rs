//! Stanley Druckenmiller - Macro investor.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn stanley_druckenmiller_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Stanley Druckenmiller")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "stanley_druckenmiller".to_string(),
            display_name: "Stanley Druckenmiller".to_string(),
            localized_name: "斯坦利·德鲁肯米勒".to_string(),
            description: "宏观投资大师".to_string(),
            investing_style: "专注于宏观经济趋势,通过自上而下的分析对货币、大宗商品和利率进行大规模押注。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 9,
        },
        handler: Arc::new(stanley_druckenmiller_agent),
    }
}
