//! ListDecisionsHandler - Query handler for past decision analyses.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DecisionRepository;

/// Most decisions returned by a listing.
pub const DECISION_LIST_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub user_id: UserId,
}

pub struct ListDecisionsHandler {
    decisions: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(decisions: Arc<dyn DecisionRepository>) -> Self {
        Self { decisions }
    }

    /// The latest decisions, newest first.
    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DomainError> {
        self.decisions
            .find_recent(&query.user_id, Some(DECISION_LIST_LIMIT))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Stores;
    use crate::domain::decision::{DecisionResult, Question};

    #[tokio::test]
    async fn caps_listing_at_limit() {
        let stores = Stores::new();
        let user_id = UserId::new();
        for i in 0..(DECISION_LIST_LIMIT + 3) {
            let question = Question::parse(Some(&format!("Question {}", i))).unwrap();
            let decision = Decision::new(user_id, question, DecisionResult::default(), String::new());
            stores.decisions.save(&decision).await.unwrap();
        }

        let listed = ListDecisionsHandler::new(stores.decisions())
            .handle(ListDecisionsQuery { user_id })
            .await
            .unwrap();

        assert_eq!(listed.len(), DECISION_LIST_LIMIT);
        assert_eq!(listed[0].question, format!("Question {}", DECISION_LIST_LIMIT + 2));
    }
}
