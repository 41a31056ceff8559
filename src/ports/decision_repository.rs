//! Decision repository port. Decisions are append-only.

use async_trait::async_trait;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Append a decision.
    async fn save(&self, decision: &Decision) -> Result<(), DomainError>;

    /// A user's decisions, newest first, optionally limited to the `limit` most recent.
    async fn find_recent(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<Decision>, DomainError>;
}
