use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::emotion::EmotionRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EmotionRepository;

use super::newest_first;

/// Append-only emotion log.
#[derive(Default)]
pub struct InMemoryEmotionRepository {
    records: RwLock<Vec<EmotionRecord>>,
}

impl InMemoryEmotionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmotionRepository for InMemoryEmotionRepository {
    async fn save(&self, record: &EmotionRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn find_recent(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<EmotionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(newest_first(
            &records,
            |r| &r.user_id == user_id,
            |r| r.timestamp,
            limit,
        ))
    }
}
