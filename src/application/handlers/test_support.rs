//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryCourseRepository, InMemoryDecisionRepository, InMemoryEmotionRepository,
    InMemoryUserRepository,
};
use crate::domain::user::{Registration, User};
use crate::ports::{CourseRepository, DecisionRepository, EmotionRepository, UserRepository};

pub(crate) struct Stores {
    pub users: Arc<InMemoryUserRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
    pub emotions: Arc<InMemoryEmotionRepository>,
    pub decisions: Arc<InMemoryDecisionRepository>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            courses: Arc::new(InMemoryCourseRepository::new()),
            emotions: Arc::new(InMemoryEmotionRepository::new()),
            decisions: Arc::new(InMemoryDecisionRepository::new()),
        }
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    pub fn courses(&self) -> Arc<dyn CourseRepository> {
        self.courses.clone()
    }

    pub fn emotions(&self) -> Arc<dyn EmotionRepository> {
        self.emotions.clone()
    }

    pub fn decisions(&self) -> Arc<dyn DecisionRepository> {
        self.decisions.clone()
    }

    /// Stores a student with a placeholder hash and returns it.
    pub async fn student(&self, name: &str, email: &str) -> User {
        let registration = Registration::parse(Some(name), Some(email), Some("pw")).unwrap();
        let user = User::new(registration, "not-a-real-hash".to_string());
        self.users.save(&user).await.unwrap();
        user
    }
}
