//! Decision advisor prompt and model-output reading.
//!
//! The model is asked for a fixed JSON shape. Its answer is read tolerantly:
//! unparseable text becomes a fallback result carrying the text itself, and
//! every missing or malformed key is filled with a neutral default. Reading
//! the answer never fails.

use serde_json::{Map, Value};

use crate::domain::ai_text::{strip_code_fences, truncate_chars};
use crate::domain::emotion::EmotionalSignals;
use crate::domain::foundation::Percentage;
use crate::domain::user::User;

use super::{DecisionResult, Question, RiskLevel, DEFAULT_CONFIDENCE};

/// Sampling temperature for decision advice.
pub const ADVISOR_TEMPERATURE: f32 = 0.25;

/// Output token budget for decision advice.
pub const ADVISOR_MAX_TOKENS: u32 = 800;

/// Number of recent emotion records summarized into the prompt.
pub const ADVISOR_EMOTION_WINDOW: usize = 10;

/// Characters of raw model text kept when the answer is not JSON.
const FALLBACK_DECISION_CHARS: usize = 1000;

/// Prompt template for decision advice.
pub struct AdvisorPrompt;

impl AdvisorPrompt {
    /// Builds the advisor prompt from the question and the student's context.
    pub fn build(question: &Question, user: &User, emotions: &EmotionalSignals) -> String {
        let cognitive_profile = user
            .cognitive_profile
            .as_ref()
            .and_then(|profile| serde_json::to_string(profile).ok())
            .unwrap_or_else(|| "{}".to_string());
        let emotional_summary =
            serde_json::to_string(emotions).unwrap_or_else(|_| "{}".to_string());
        let learning_styles =
            serde_json::to_string(&user.learning_styles).unwrap_or_else(|_| "[]".to_string());
        let subjects = serde_json::to_string(&user.subjects).unwrap_or_else(|_| "[]".to_string());

        format!(
            r#"You are an expert decision advisor that tailors decisions to a student's cognitive profile and emotional state.
Return STRICT JSON only.

User question: "{question}"

User context:
- Name: {name}
- Email: {email}
- Learning styles: {learning_styles}
- Subjects: {subjects}
- Cognitive profile: {cognitive_profile}
- Recent emotion summary: {emotional_summary}

Respond with a JSON object with the following keys:
- final_decision: string (direct concise recommendation)
- rationale: string (concise explanation of reasoning)
- confidence_score: integer (0-100)
- bias_detected: string or null (e.g., "Overconfidence", "Loss aversion", null)
- risk_level: "low"|"medium"|"high"
- cognitive_alignment: string (how well this decision fits user's cognitive style)
- emotional_influence: string (how current emotions might bias or affect this decision)
- short_term_effect: string
- long_term_effect: string
- action_steps: array of short actionable steps (strings)

Keep answers concise and practical."#,
            question = question.as_str(),
            name = user.name,
            email = user.email,
        )
    }
}

impl DecisionResult {
    /// Reads raw model output into a normalized result.
    ///
    /// Returns the result together with the cleaned text that should be
    /// stored for audit.
    pub fn from_model_output(raw: &str) -> (Self, String) {
        let cleaned = strip_code_fences(raw);
        let result = match serde_json::from_str::<Value>(&cleaned) {
            Ok(Value::Object(fields)) => Self::normalize(&fields),
            Ok(_) | Err(_) => {
                tracing::warn!("Decision answer is not a JSON object, using text fallback");
                Self::text_fallback(&cleaned)
            }
        };
        (result, cleaned)
    }

    /// Result synthesized from unstructured model text.
    pub fn text_fallback(cleaned: &str) -> Self {
        Self {
            final_decision: truncate_chars(cleaned, FALLBACK_DECISION_CHARS),
            ..Self::default()
        }
    }

    fn normalize(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            final_decision: text("final_decision"),
            rationale: text("rationale"),
            confidence_score: fields
                .get("confidence_score")
                .and_then(confidence)
                .unwrap_or(DEFAULT_CONFIDENCE),
            bias_detected: fields
                .get("bias_detected")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            risk_level: fields
                .get("risk_level")
                .and_then(Value::as_str)
                .map(RiskLevel::from_label)
                .unwrap_or_default(),
            cognitive_alignment: text("cognitive_alignment"),
            emotional_influence: text("emotional_influence"),
            short_term_effect: text("short_term_effect"),
            long_term_effect: text("long_term_effect"),
            action_steps: fields
                .get("action_steps")
                .and_then(Value::as_array)
                .map(|steps| {
                    steps
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn confidence(value: &Value) -> Option<Percentage> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    }?;
    Some(Percentage::from_score(score))
}
