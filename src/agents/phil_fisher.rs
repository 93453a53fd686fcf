//! Phil Fisher - Scuttlebutt researcher.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn phil_fisher_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Phil Fisher")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "phil_fisher".to_string(),
            display_name: "Phil Fisher".to_string(),
            localized_name: "菲利普·费雪".to_string(),
            description: "闲聊调研投资者".to_string(),
            investing_style: "强调投资于拥有强大管理团队和创新产品的公司,通过闲聊调研专注于长期增长。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 7,
        },
        handler: Arc::new(phil_fisher_agent),
    }
}
