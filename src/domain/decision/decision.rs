//! Stored decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DecisionId, Percentage, Timestamp, UserId, ValidationError};

/// Confidence assumed when the model does not give a usable one.
pub const DEFAULT_CONFIDENCE: Percentage = Percentage::HALF;

/// Risk attached to a recommended decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    /// Reads a model-supplied label. Unknown labels map to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Normalized advice returned to the student and stored for later analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub final_decision: String,
    pub rationale: String,
    pub confidence_score: Percentage,
    pub bias_detected: Option<String>,
    pub risk_level: RiskLevel,
    pub cognitive_alignment: String,
    pub emotional_influence: String,
    pub short_term_effect: String,
    pub long_term_effect: String,
    pub action_steps: Vec<String>,
}

impl Default for DecisionResult {
    fn default() -> Self {
        Self {
            final_decision: String::new(),
            rationale: String::new(),
            confidence_score: DEFAULT_CONFIDENCE,
            bias_detected: None,
            risk_level: RiskLevel::Medium,
            cognitive_alignment: String::new(),
            emotional_influence: String::new(),
            short_term_effect: String::new(),
            long_term_effect: String::new(),
            action_steps: Vec::new(),
        }
    }
}

/// A validated decision question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trims the question and rejects it when blank.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let question = raw.map(str::trim).unwrap_or_default();
        if question.is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self(question.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A stored decision analysis. Decisions are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub user_id: UserId,
    pub question: String,
    pub result: DecisionResult,
    /// Cleaned model output, kept for audit.
    pub raw_ai: String,
    pub timestamp: Timestamp,
}

impl Decision {
    /// Creates a decision stamped with the current time.
    pub fn new(user_id: UserId, question: Question, result: DecisionResult, raw_ai: String) -> Self {
        Self {
            id: DecisionId::new(),
            user_id,
            question: question.into_inner(),
            result,
            raw_ai,
            timestamp: Timestamp::now(),
        }
    }

    /// Mean confidence over a window of decisions, `None` when empty.
    pub fn average_confidence(decisions: &[Decision]) -> Option<Percentage> {
        Percentage::mean(decisions.iter().map(|d| d.result.confidence_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_trimmed_and_required() {
        assert_eq!(Question::parse(Some("  Should I?  ")).unwrap().as_str(), "Should I?");
        assert!(Question::parse(Some("   ")).is_err());
        assert!(Question::parse(None).is_err());
    }

    #[test]
    fn risk_level_reads_labels_leniently() {
        assert_eq!(RiskLevel::from_label("HIGH"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label(" low "), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label("extreme"), RiskLevel::Medium);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn default_result_is_neutral() {
        let result = DecisionResult::default();
        assert_eq!(result.confidence_score.value(), 50);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.bias_detected.is_none());
        assert!(result.action_steps.is_empty());
    }

    #[test]
    fn average_confidence_over_window() {
        let user = UserId::new();
        let make = |confidence: u8| {
            Decision::new(
                user,
                Question::parse(Some("q")).unwrap(),
                DecisionResult {
                    confidence_score: Percentage::new(confidence),
                    ..DecisionResult::default()
                },
                String::new(),
            )
        };

        assert_eq!(Decision::average_confidence(&[]), None);
        assert_eq!(
            Decision::average_confidence(&[make(80), make(61)]),
            Some(Percentage::new(71))
        );
    }
}
