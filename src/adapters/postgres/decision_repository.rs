//! PostgreSQL implementation of DecisionRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::decision::{Decision, DecisionResult};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

use super::row::{column, limit, timestamp};

#[derive(Clone)]
pub struct PostgresDecisionRepository {
    pool: PgPool,
}

impl PostgresDecisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for PostgresDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO decisions (id, user_id, question, result, raw_ai, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(decision.id.as_uuid())
        .bind(decision.user_id.as_uuid())
        .bind(&decision.question)
        .bind(Json(&decision.result))
        .bind(&decision.raw_ai)
        .bind(decision.timestamp.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert decision", e))?;

        Ok(())
    }

    async fn find_recent(
        &self,
        user_id: &UserId,
        max: Option<usize>,
    ) -> Result<Vec<Decision>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, question, result, raw_ai, created_at
            FROM decisions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit(max))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch decisions", e))?;

        rows.iter().map(row_to_decision).collect()
    }
}

fn row_to_decision(row: &PgRow) -> Result<Decision, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: uuid::Uuid = column(row, "user_id")?;
    let result: Json<DecisionResult> = column(row, "result")?;

    Ok(Decision {
        id: DecisionId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        question: column(row, "question")?,
        result: result.0,
        raw_ai: column(row, "raw_ai")?,
        timestamp: timestamp(row, "created_at")?,
    })
}
