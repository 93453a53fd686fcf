//! Sentiment Analyst - Market sentiment and investor behavior.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn sentiment_analyst_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("Sentiment Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "sentiment_analyst".to_string(),
            display_name: "Sentiment Analyst".to_string(),
            localized_name: "市场情绪分析师".to_string(),
            description: "市场情绪专家".to_string(),
            investing_style: "通过行为分析来评估市场情绪和投资者行为,预测市场走势并识别机会。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 15,
        },
        handler: Arc::new(sentiment_analyst_agent),
    }
}
