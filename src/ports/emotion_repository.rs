//! Emotion repository port. Records are append-only.

use async_trait::async_trait;

use crate::domain::emotion::EmotionRecord;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait EmotionRepository: Send + Sync {
    /// Append a record.
    async fn save(&self, record: &EmotionRecord) -> Result<(), DomainError>;

    /// A user's records, newest first, optionally limited to the `limit` most recent.
    async fn find_recent(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<EmotionRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn EmotionRepository) {}
    }
}
