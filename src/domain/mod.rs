//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth)
//! - `user` - Student accounts and profile editing
//! - `course` - Courses, progress calculation and learning metrics
//! - `emotion` - Emotion records, interpretation and windowed signals
//! - `decision` - Decision advice prompt and result normalization
//! - `cognitive` - Five-axis cognitive profile engine
//! - `dashboard` - Read-only dashboard composition

pub mod ai_text;
pub mod cognitive;
pub mod course;
pub mod dashboard;
pub mod decision;
pub mod emotion;
pub mod foundation;
pub mod user;
