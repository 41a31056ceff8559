//! Request and response bodies for emotion endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::domain::emotion::{AIInterpretation, EmotionRecord};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEmotionRequest {
    #[serde(default)]
    pub emotion: Option<String>,
    /// Kept raw so a non-integer can be reported with a clear message.
    #[serde(default)]
    pub intensity: Option<Value>,
}

impl LogEmotionRequest {
    /// The intensity as an integer, `None` when absent or null.
    pub fn intensity(&self) -> Result<Option<i64>, ApiError> {
        match &self.intensity {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| ApiError::bad_request("Intensity must be an integer")),
            Some(_) => Err(ApiError::bad_request("Intensity must be an integer")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEmotionResponse {
    pub message: String,
    pub ai: Option<AIInterpretation>,
}

impl From<EmotionRecord> for LogEmotionResponse {
    fn from(record: EmotionRecord) -> Self {
        Self {
            message: "Emotion recorded successfully".to_string(),
            ai: record.ai,
        }
    }
}

/// One entry of the emotion log.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionResponse {
    pub id: String,
    pub user_id: String,
    pub emotion: String,
    pub intensity: u8,
    pub timestamp: String,
    /// `{}` when the record has no interpretation.
    pub ai: Value,
}

impl From<EmotionRecord> for EmotionResponse {
    fn from(record: EmotionRecord) -> Self {
        let ai = record
            .ai
            .as_ref()
            .and_then(|ai| serde_json::to_value(ai).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));

        Self {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            emotion: record.emotion,
            intensity: record.intensity.value(),
            timestamp: record.timestamp.to_display_string(),
            ai,
        }
    }
}
