//! Decision advisor.

mod analyze_decision;
mod list_decisions;

pub use analyze_decision::{AnalyzeDecisionCommand, AnalyzeDecisionHandler};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery, DECISION_LIST_LIMIT};
