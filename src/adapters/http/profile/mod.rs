//! HTTP adapter for the student profile and its cognitive analysis.

mod dto;
mod handlers;
mod routes;

pub use dto::ProfileResponse;
pub use handlers::ProfileHandlers;
pub use routes::{cognitive_routes, profile_routes};
