//! Cathie Wood - Disruptive-growth investor.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn cathie_wood_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Cathie Wood")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "cathie_wood".to_string(),
            display_name: "Cathie Wood".to_string(),
            localized_name: "凯茜·伍德".to_string(),
            description: "成长投资女王".to_string(),
            investing_style: "专注于颠覆性创新和增长,投资于引领技术进步和市场颠覆的公司。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 3,
        },
        handler: Arc::new(cathie_wood_agent),
    }
}
