//! Request and response bodies for decision endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{Decision, DecisionResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeDecisionRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// A past decision as listed to the student. `raw_ai` is not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    pub id: String,
    pub question: String,
    pub result: DecisionResult,
    pub timestamp: String,
}

impl From<Decision> for DecisionResponse {
    fn from(decision: Decision) -> Self {
        Self {
            id: decision.id.to_string(),
            question: decision.question,
            result: decision.result,
            timestamp: decision.timestamp.to_display_string(),
        }
    }
}
