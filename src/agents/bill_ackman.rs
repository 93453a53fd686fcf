//! Bill Ackman - Activist investor.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn bill_ackman_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Bill Ackman")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "bill_ackman".to_string(),
            display_name: "Bill Ackman".to_string(),
            localized_name: "比尔·阿克曼".to_string(),
            description: "激进投资者".to_string(),
            investing_style: "通过战略性的激进主义和逆向投资立场,寻求影响管理层并释放价值。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 2,
        },
        handler: Arc::new(bill_ackman_agent),
    }
}
