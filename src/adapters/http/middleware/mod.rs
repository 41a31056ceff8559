//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token authentication and the current-user extractor

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthState, RequireAuth};
