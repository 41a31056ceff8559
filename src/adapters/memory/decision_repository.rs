use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DecisionRepository;

use super::newest_first;

#[derive(Default)]
pub struct InMemoryDecisionRepository {
    decisions: RwLock<Vec<Decision>>,
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        self.decisions.write().await.push(decision.clone());
        Ok(())
    }

    async fn find_recent(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<Decision>, DomainError> {
        let decisions = self.decisions.read().await;
        Ok(newest_first(
            &decisions,
            |d| &d.user_id == user_id,
            |d| d.timestamp,
            limit,
        ))
    }
}
