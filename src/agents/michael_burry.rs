//! Michael Burry - The Big Short contrarian.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn michael_burry_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Michael Burry")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "michael_burry".to_string(),
            display_name: "Michael Burry".to_string(),
            localized_name: "迈克尔·伯里".to_string(),
            description: "大空头逆向投资者".to_string(),
            investing_style: "通过深入的基本面分析进行逆向投资,经常做空高估市场并投资被低估的资产。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 5,
        },
        handler: Arc::new(michael_burry_agent),
    }
}
