//! Deterministic rule-based assistant
//!
//! Two stages. Store questions (shipping, returns, contact) are
//! matched first and answered from fixed store facts with no
//! recommendations. Anything else is treated as a product query: the
//! catalog is scored by keyword overlap with name, category, and
//! description, and the top three scoring products come back with a reason
//! each. A query that matches nothing gets a polite pointer to the contact
//! form.

use crate::chat::{Assistant, AssistantReply, Recommendation};
use crate::model::Product;
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;

const SHIPPING_ANSWER: &str = "We offer free standard shipping on all orders over $50. \
     For orders under $50, standard shipping is a flat rate of $5.";
const RETURNS_ANSWER: &str =
    "We have a 14-day return policy for unopened and unused products.";
const CONTACT_ANSWER: &str = "For anything I can't resolve, please use the contact form \
     on our website to reach our support team.";
const NO_MATCH_ANSWER: &str = "I couldn't find anything in our catalog matching that. \
     If you need more help, please use the contact form on our website.";

/// Words too common to signal intent on their own
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "any", "are", "best", "can", "do", "for", "get", "good", "have", "i",
    "in", "is", "it", "looking", "me", "my", "need", "of", "on", "or", "show", "some",
    "something", "the", "to", "want", "what", "which", "with", "you", "your",
];

pub struct RuleBasedAssistant {
    shipping: Regex,
    returns: Regex,
    contact: Regex,
    words: Regex,
}

impl RuleBasedAssistant {
    pub fn new() -> Result<Self> {
        Ok(Self {
            shipping: Regex::new(r"(?i)\b(ship|shipping|shipment|deliver|delivery|postage)\b")?,
            returns: Regex::new(r"(?i)\b(return|returns|refund|exchange)\b")?,
            contact: Regex::new(r"(?i)\b(contact|support|human|agent|complaint)\b")?,
            words: Regex::new(r"[a-z0-9]+")?,
        })
    }

    fn keywords(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        self.words
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|w| !STOPWORDS.contains(&w.as_str()))
            .collect()
    }

    /// Score a product against the query keywords. Name hits weigh most,
    /// then category, then description.
    fn score(product: &Product, keywords: &[String]) -> u32 {
        let name = product.name.to_lowercase();
        let category = product.category.to_lowercase();
        let description = product.description.to_lowercase();
        let mut score = 0;
        for word in keywords {
            if name.contains(word) {
                score += 3;
            }
            if category.contains(word) {
                score += 2;
            }
            if description.contains(word) {
                score += 1;
            }
        }
        score
    }

    fn recommend(&self, query: &str, products: &[Product]) -> AssistantReply {
        let keywords = self.keywords(query);
        let mut scored: Vec<(u32, &Product)> = products
            .iter()
            .map(|p| (Self::score(p, &keywords), p))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable sort keeps catalog order among ties.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(3);

        if scored.is_empty() {
            return AssistantReply::text(NO_MATCH_ANSWER);
        }

        let recommendations = scored
            .iter()
            .map(|(_, product)| Recommendation {
                id: product.id,
                reason: format!(
                    "{} ({}) fits what you described at ${:.2}.",
                    product.name, product.category, product.price
                ),
            })
            .collect();
        AssistantReply {
            text_response: "Here's what I'd suggest from our catalog:".to_string(),
            recommendations,
        }
    }
}

#[async_trait]
impl Assistant for RuleBasedAssistant {
    async fn reply(&self, query: &str, products: &[Product]) -> Result<AssistantReply> {
        if self.shipping.is_match(query) {
            return Ok(AssistantReply::text(SHIPPING_ANSWER));
        }
        if self.returns.is_match(query) {
            return Ok(AssistantReply::text(RETURNS_ANSWER));
        }
        if self.contact.is_match(query) {
            return Ok(AssistantReply::text(CONTACT_ANSWER));
        }
        Ok(self.recommend(query, products))
    }
}
