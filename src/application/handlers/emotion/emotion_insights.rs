//! EmotionInsightsHandler - Summary of the most recent emotions.
//!
//! Backs both the summary and the insights endpoints.

use std::sync::Arc;

use crate::domain::emotion::{EmotionInsight, INSIGHT_WINDOW};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EmotionRepository;

#[derive(Debug, Clone)]
pub struct EmotionInsightsQuery {
    pub user_id: UserId,
}

pub struct EmotionInsightsHandler {
    emotions: Arc<dyn EmotionRepository>,
}

impl EmotionInsightsHandler {
    pub fn new(emotions: Arc<dyn EmotionRepository>) -> Self {
        Self { emotions }
    }

    pub async fn handle(&self, query: EmotionInsightsQuery) -> Result<EmotionInsight, DomainError> {
        let recent = self
            .emotions
            .find_recent(&query.user_id, Some(INSIGHT_WINDOW))
            .await?;
        Ok(EmotionInsight::from_records(&recent))
    }
}
