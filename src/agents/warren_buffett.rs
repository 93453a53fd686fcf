//! Warren Buffett - The Oracle of Omaha.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn warren_buffett_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Warren Buffett")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "warren_buffett".to_string(),
            display_name: "Warren Buffett".to_string(),
            localized_name: "沃伦·巴菲特".to_string(),
            description: "奥马哈先知".to_string(),
            investing_style: "通过价值投资和长期持有,寻找具有强大基本面和竞争优势的公司。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 10,
        },
        handler: Arc::new(warren_buffett_agent),
    }
}
