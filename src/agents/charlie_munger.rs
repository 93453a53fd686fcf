//! Charlie Munger - Rational thinker, quality businesses.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn charlie_munger_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Charlie Munger")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "charlie_munger".to_string(),
            display_name: "Charlie Munger".to_string(),
            localized_name: "查理·芒格".to_string(),
            description: "理性思考者".to_string(),
            investing_style: "倡导价值投资,通过理性决策专注于优质企业和长期增长。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 4,
        },
        handler: Arc::new(charlie_munger_agent),
    }
}
