//! Ben Graham - The father of value investing.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn ben_graham_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Ben Graham")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "ben_graham".to_string(),
            display_name: "Ben Graham".to_string(),
            localized_name: "本杰明·格雷厄姆".to_string(),
            description: "价值投资之父".to_string(),
            investing_style: "强调安全边际,通过系统的价值分析投资于基本面强劲的被低估公司。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 1,
        },
        handler: Arc::new(ben_graham_agent),
    }
}
