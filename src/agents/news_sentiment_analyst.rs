//! News Sentiment Analyst - News-driven sentiment.

use std::sync::Arc;

use super::{AgentTask, AgentVerdict};
use crate::analysts::{AnalystCategory, AnalystMeta, AnalystSpec};

pub fn news_sentiment_agent(_task: &AgentTask) -> AgentVerdict {
    AgentVerdict::abstain("News Sentiment Analyst")
}

pub fn spec() -> AnalystSpec {
    AnalystSpec {
        meta: AnalystMeta {
            key: "news_sentiment_analyst".to_string(),
            display_name: "News Sentiment Analyst".to_string(),
            localized_name: "新闻情绪分析师".to_string(),
            description: "新闻情绪专家".to_string(),
            investing_style: "通过新闻分析来分析新闻情绪,预测市场走势并识别机会。".to_string(),
            category: AnalystCategory::Analyst,
            rank: 14,
        },
        handler: Arc::new(news_sentiment_agent),
    }
}
