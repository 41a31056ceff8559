//! PostgreSQL adapters for the repository ports.
//!
//! Nested aggregates (course items, cached profiles, LLM output) are stored
//! as JSONB next to the scalar columns they belong to.

mod course_repository;
mod decision_repository;
mod emotion_repository;
mod row;
mod user_repository;

pub use course_repository::PostgresCourseRepository;
pub use decision_repository::PostgresDecisionRepository;
pub use emotion_repository::PostgresEmotionRepository;
pub use user_repository::PostgresUserRepository;
