//! Peter Lynch - Ten-bagger hunter. Shares ordering rank 6 with mohnish_pabrai.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn peter_lynch_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Peter Lynch")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "peter_lynch".to_string(),
            display_name: "Peter Lynch".to_string(),
            localized_name: "彼得·林奇".to_string(),
            description: "十倍股投资者".to_string(),
            investing_style: "采用'买你所了解的'策略,投资于商业模式易懂且增长潜力强的公司。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 6,
        },
        handler: Arc::new(peter_lynch_agent),
    }
}
