//! HTTP adapter for the decision advisor.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeDecisionRequest, DecisionResponse};
pub use handlers::DecisionHandlers;
pub use routes::{decision_routes, decisions_routes};
