//! ListEmotionsHandler - Query handler for a student's emotion log.

use std::sync::Arc;

use crate::domain::emotion::EmotionRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EmotionRepository;

#[derive(Debug, Clone)]
pub struct ListEmotionsQuery {
    pub user_id: UserId,
}

pub struct ListEmotionsHandler {
    emotions: Arc<dyn EmotionRepository>,
}

impl ListEmotionsHandler {
    pub fn new(emotions: Arc<dyn EmotionRepository>) -> Self {
        Self { emotions }
    }

    /// Every record, newest first.
    pub async fn handle(&self, query: ListEmotionsQuery) -> Result<Vec<EmotionRecord>, DomainError> {
        self.emotions.find_recent(&query.user_id, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Stores;
    use crate::domain::emotion::{AIInterpretation, NewEmotion};

    #[tokio::test]
    async fn lists_only_own_records_newest_first() {
        let stores = Stores::new();
        let ada = UserId::new();
        let bob = UserId::new();

        for (user, label) in [(ada, "Calm"), (bob, "Angry"), (ada, "Happy")] {
            let record = EmotionRecord::new(
                user,
                NewEmotion::parse(Some(label), None).unwrap(),
                AIInterpretation::fallback(),
            );
            stores.emotions.save(&record).await.unwrap();
        }

        let listed = ListEmotionsHandler::new(stores.emotions())
            .handle(ListEmotionsQuery { user_id: ada })
            .await
            .unwrap();

        let labels: Vec<_> = listed.iter().map(|r| r.emotion.as_str()).collect();
        assert_eq!(labels, vec!["Happy", "Calm"]);
    }
}
