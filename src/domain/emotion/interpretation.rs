//! Model interpretation of a logged emotion.
//!
//! Each emotion is interpreted once, at logging time, into focus, stress
//! and motivation scores plus short advice. If the model call fails or its
//! answer cannot be read, a fixed neutral interpretation is stored instead
//! and the record is still written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ai_text::strip_code_fences;
use crate::domain::foundation::Percentage;

/// Sampling temperature for emotion interpretation.
pub const INTERPRETATION_TEMPERATURE: f32 = 0.3;

/// Model reading of an emotion's cognitive impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIInterpretation {
    #[serde(default)]
    pub focus_score: Option<Percentage>,
    #[serde(default)]
    pub stress_score: Option<Percentage>,
    #[serde(default)]
    pub motivation_score: Option<Percentage>,
    #[serde(default)]
    pub cognitive_state: String,
    #[serde(default)]
    pub interpretation: String,
    #[serde(default)]
    pub recommendation: String,
}

impl AIInterpretation {
    /// The neutral interpretation stored when the model is unavailable.
    pub fn fallback() -> Self {
        Self {
            focus_score: Some(Percentage::HALF),
            stress_score: Some(Percentage::HALF),
            motivation_score: Some(Percentage::HALF),
            cognitive_state: "neutral".to_string(),
            interpretation: "AI failed to interpret emotion, fallback values used.".to_string(),
            recommendation: "Try logging again in a moment.".to_string(),
        }
    }

    /// Reads a model answer. Fails when the cleaned text is not a JSON object.
    ///
    /// Scores are accepted as numbers or numeric strings and clamped into
    /// `[0, 100]`; missing scores stay absent so later averages skip them.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let cleaned = strip_code_fences(raw);
        let value: Value = serde_json::from_str(&cleaned)?;
        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "expected a JSON object, got {}",
                    other
                )))
            }
        };

        let score = |key: &str| object.get(key).and_then(numeric).map(Percentage::from_score);
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        Ok(Self {
            focus_score: score("focus_score"),
            stress_score: score("stress_score"),
            motivation_score: score("motivation_score"),
            cognitive_state: text("cognitive_state"),
            interpretation: text("interpretation"),
            recommendation: text("recommendation"),
        })
    }

    /// Reads a model answer, substituting the fallback when it is unreadable.
    pub fn parse_or_fallback(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Unreadable emotion interpretation, using fallback");
            Self::fallback()
        })
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Prompt template for emotion interpretation.
pub struct InterpretationPrompt;

impl InterpretationPrompt {
    /// Builds the interpretation prompt for a logged emotion.
    pub fn build(emotion: &str, intensity: Percentage) -> String {
        format!(
            r#"You are an Emotional Cognitive Twin Engine analyzing the user's emotional state.

Emotion Logged: {emotion}
Intensity: {intensity}

Output STRICT JSON:

{{
  "focus_score": number (0-100),
  "stress_score": number (0-100),
  "motivation_score": number (0-100),
  "cognitive_state": "string",
  "interpretation": "short explanation",
  "recommendation": "one actionable suggestion"
}}"#,
            emotion = emotion,
            intensity = intensity.value(),
        )
    }
}
