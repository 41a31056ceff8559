//! PostgreSQL implementation of EmotionRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::emotion::{AIInterpretation, EmotionRecord};
use crate::domain::foundation::{DomainError, EmotionId, UserId};
use crate::ports::EmotionRepository;

use super::row::{column, limit, percentage, timestamp};

#[derive(Clone)]
pub struct PostgresEmotionRepository {
    pool: PgPool,
}

impl PostgresEmotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmotionRepository for PostgresEmotionRepository {
    async fn save(&self, record: &EmotionRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO emotions (id, user_id, emotion, intensity, ai, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_uuid())
        .bind(&record.emotion)
        .bind(i16::from(record.intensity.value()))
        .bind(record.ai.as_ref().map(Json))
        .bind(record.timestamp.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert emotion", e))?;

        Ok(())
    }

    async fn find_recent(
        &self,
        user_id: &UserId,
        max: Option<usize>,
    ) -> Result<Vec<EmotionRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, emotion, intensity, ai, created_at
            FROM emotions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit(max))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch emotions", e))?;

        rows.iter().map(row_to_emotion).collect()
    }
}

fn row_to_emotion(row: &PgRow) -> Result<EmotionRecord, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: uuid::Uuid = column(row, "user_id")?;
    let ai: Option<Json<AIInterpretation>> = column(row, "ai")?;

    Ok(EmotionRecord {
        id: EmotionId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        emotion: column(row, "emotion")?,
        intensity: percentage(row, "intensity")?,
        timestamp: timestamp(row, "created_at")?,
        ai: ai.map(|j| j.0),
    })
}
