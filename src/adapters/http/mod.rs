//! HTTP adapter - REST API over axum.
//!
//! Each area has its own `dto` / `handlers` / `routes` modules. Handlers
//! translate requests into application commands and map `DomainError`
//! through `ApiError`.

pub mod auth;
pub mod course;
pub mod dashboard;
pub mod decision;
pub mod emotion;
pub mod error;
pub mod middleware;
pub mod profile;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse, JsonBody};
pub use router::api_router;
pub use state::AppState;
