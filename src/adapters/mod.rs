//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI-compatible chat completions and a scripted mock
//! - `auth` - JWT issuing/validation and a mock validator
//! - `http` - axum REST API
//! - `memory` - In-memory repositories for tests and local runs
//! - `password` - Argon2id password hashing
//! - `postgres` - sqlx repositories

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod password;
pub mod postgres;
