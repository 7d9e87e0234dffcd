//! The FlexBot shopping assistant
//!
//! [`Assistant`] is the seam a generative provider would plug into; the
//! shipped implementation is [`rules::RuleBasedAssistant`], which answers
//! store questions from fixed facts and recommends products by keyword
//! scoring. The reply shape is fixed regardless of implementation: a
//! conversational text plus zero to three product recommendations.

pub mod rules;

pub use rules::RuleBasedAssistant;

use crate::model::Product;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A recommended product and why it fits the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub text_response: String,
    pub recommendations: Vec<Recommendation>,
}

impl AssistantReply {
    /// Plain text answer with no recommendations
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text_response: text.into(),
            recommendations: Vec::new(),
        }
    }

    /// The degraded reply used when the assistant backend fails
    pub fn apology() -> Self {
        Self::text(
            "I'm sorry, I encountered an issue trying to find recommendations. \
             Please try again.",
        )
    }
}

/// A shopping assistant answering one query against the current catalog.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, query: &str, products: &[Product]) -> Result<AssistantReply>;
}
