//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::{
    AIProvider, CourseRepository, DecisionRepository, EmotionRepository, PasswordHasher,
    SessionValidator, TokenIssuer, UserRepository,
};

/// Services built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub emotions: Arc<dyn EmotionRepository>,
    pub decisions: Arc<dyn DecisionRepository>,
    pub ai: Arc<dyn AIProvider>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub sessions: Arc<dyn SessionValidator>,
    /// Upper bound on a single model call.
    pub ai_timeout: Duration,
}
