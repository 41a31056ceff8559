//! Emotion records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmotionId, Percentage, Timestamp, UserId, ValidationError};

use super::AIInterpretation;

/// Intensity assumed when the caller does not provide one.
pub const DEFAULT_INTENSITY: Percentage = Percentage::HALF;

/// Validated input for logging an emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmotion {
    pub emotion: String,
    pub intensity: Percentage,
}

impl NewEmotion {
    /// Validates the raw fields.
    ///
    /// The label is required (after trimming); intensity defaults to 50
    /// and must lie in `[0, 100]`.
    pub fn parse(emotion: Option<&str>, intensity: Option<i64>) -> Result<Self, ValidationError> {
        let emotion = emotion.map(str::trim).unwrap_or_default();
        if emotion.is_empty() {
            return Err(ValidationError::empty_field("emotion"));
        }

        let intensity = match intensity {
            Some(value) => Percentage::try_new(value)
                .map_err(|_| ValidationError::out_of_range("intensity", 0, 100, value))?,
            None => DEFAULT_INTENSITY,
        };

        Ok(Self {
            emotion: emotion.to_string(),
            intensity,
        })
    }
}

/// A single logged emotion. Records are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub id: EmotionId,
    pub user_id: UserId,
    pub emotion: String,
    pub intensity: Percentage,
    pub timestamp: Timestamp,
    pub ai: Option<AIInterpretation>,
}

impl EmotionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(user_id: UserId, input: NewEmotion, ai: AIInterpretation) -> Self {
        Self {
            id: EmotionId::new(),
            user_id,
            emotion: input.emotion,
            intensity: input.intensity,
            timestamp: Timestamp::now(),
            ai: Some(ai),
        }
    }
}
