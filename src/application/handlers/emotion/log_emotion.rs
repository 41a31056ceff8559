//! LogEmotionHandler - Records an emotion with its model interpretation.
//!
//! The model is asked once. A provider error, a timeout or an unreadable
//! answer all yield the fixed fallback interpretation; the record is
//! written either way.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::emotion::{
    AIInterpretation, EmotionRecord, InterpretationPrompt, NewEmotion, INTERPRETATION_TEMPERATURE,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::ports::{
    AIProvider, CompletionPurpose, CompletionRequest, EmotionRepository, MessageRole,
    RequestMetadata,
};

use crate::application::handlers::complete_within;

#[derive(Debug, Clone)]
pub struct LogEmotionCommand {
    pub user_id: UserId,
    pub emotion: Option<String>,
    pub intensity: Option<i64>,
}

pub struct LogEmotionHandler {
    emotions: Arc<dyn EmotionRepository>,
    ai: Arc<dyn AIProvider>,
    ai_timeout: Duration,
}

impl LogEmotionHandler {
    pub fn new(
        emotions: Arc<dyn EmotionRepository>,
        ai: Arc<dyn AIProvider>,
        ai_timeout: Duration,
    ) -> Self {
        Self {
            emotions,
            ai,
            ai_timeout,
        }
    }

    pub async fn handle(&self, cmd: LogEmotionCommand) -> Result<EmotionRecord, DomainError> {
        let input = NewEmotion::parse(cmd.emotion.as_deref(), cmd.intensity).map_err(|e| match e {
            ValidationError::EmptyField { .. } => {
                DomainError::new(ErrorCode::EmptyField, "Emotion is required")
            }
            other => other.into(),
        })?;

        let interpretation = self.interpret(&cmd.user_id, &input).await;
        let record = EmotionRecord::new(cmd.user_id, input, interpretation);
        self.emotions.save(&record).await?;

        tracing::debug!(user_id = %record.user_id, emotion = %record.emotion, "emotion logged");
        Ok(record)
    }

    async fn interpret(&self, user_id: &UserId, input: &NewEmotion) -> AIInterpretation {
        let request = CompletionRequest::new(RequestMetadata::new(
            *user_id,
            CompletionPurpose::EmotionInterpretation,
        ))
        .with_message(
            MessageRole::User,
            InterpretationPrompt::build(&input.emotion, input.intensity),
        )
        .with_temperature(INTERPRETATION_TEMPERATURE);

        match complete_within(&self.ai, request, self.ai_timeout).await {
            Ok(response) => AIInterpretation::parse_or_fallback(&response.content),
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "emotion interpretation failed, using fallback");
                AIInterpretation::fallback()
            }
        }
    }
}
