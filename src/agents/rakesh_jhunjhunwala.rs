//! Rakesh Jhunjhunwala - The Big Bull of India.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn rakesh_jhunjhunwala_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Rakesh Jhunjhunwala")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "rakesh_jhunjhunwala".to_string(),
            display_name: "Rakesh Jhunjhunwala".to_string(),
            localized_name: "拉凯什·金君瓦拉".to_string(),
            description: "印度股神".to_string(),
            investing_style: "利用宏观经济洞察投资于高增长领域,特别是在新兴市场和国内机会。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 8,
        },
        handler: Arc::new(rakesh_jhunjhunwala_agent),
    }
}
