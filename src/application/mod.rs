//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers load what they need through the ports, run the domain engines
//! and persist the outcome. Writes are commands, reads are queries.

pub mod handlers;

pub use handlers::*;
