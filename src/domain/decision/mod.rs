//! Decision domain - Model-backed decision advice tailored to a student.
//!
//! - `decision` - Stored decisions and their normalized result shape
//! - `advisor` - Prompt construction and tolerant reading of model output

mod advisor;
mod decision;

pub use advisor::{AdvisorPrompt, ADVISOR_EMOTION_WINDOW, ADVISOR_MAX_TOKENS, ADVISOR_TEMPERATURE};
pub use decision::{Decision, DecisionResult, Question, RiskLevel, DEFAULT_CONFIDENCE};
