//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `UserRepository` - Student accounts
//! - `CourseRepository` - Courses and their items
//! - `EmotionRepository` - Append-only emotion log
//! - `DecisionRepository` - Append-only decision log
//!
//! ## Service Ports
//!
//! - `AIProvider` - LLM completions
//! - `SessionValidator` / `TokenIssuer` - Bearer token handling
//! - `PasswordHasher` - One-way password hashing

mod ai_provider;
mod course_repository;
mod decision_repository;
mod emotion_repository;
mod password_hasher;
mod session_validator;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use course_repository::CourseRepository;
pub use decision_repository::DecisionRepository;
pub use emotion_repository::EmotionRepository;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use session_validator::{IssuedToken, SessionValidator, TokenIssuer};
pub use user_repository::UserRepository;
