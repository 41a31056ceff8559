//! AnalyzeProfileHandler - Recomputes and stores the caller's cognitive profile.

use std::sync::Arc;

use crate::domain::cognitive::{
    CognitiveProfileEngine, CognitiveSignals, PROFILE_DECISION_WINDOW, PROFILE_EMOTION_WINDOW,
};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::{CourseRepository, DecisionRepository, EmotionRepository, UserRepository};

use crate::application::handlers::user::load_user;

#[derive(Debug, Clone)]
pub struct AnalyzeProfileCommand {
    pub user_id: UserId,
}

pub struct AnalyzeProfileHandler {
    users: Arc<dyn UserRepository>,
    emotions: Arc<dyn EmotionRepository>,
    decisions: Arc<dyn DecisionRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl AnalyzeProfileHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        emotions: Arc<dyn EmotionRepository>,
        decisions: Arc<dyn DecisionRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            users,
            emotions,
            decisions,
            courses,
        }
    }

    /// Returns the user with the freshly stored profile.
    pub async fn handle(&self, cmd: AnalyzeProfileCommand) -> Result<User, DomainError> {
        let mut user = load_user(self.users.as_ref(), &cmd.user_id).await?;

        let emotions = self
            .emotions
            .find_recent(&cmd.user_id, Some(PROFILE_EMOTION_WINDOW))
            .await?;
        let decisions = self
            .decisions
            .find_recent(&cmd.user_id, Some(PROFILE_DECISION_WINDOW))
            .await?;
        let courses = self.courses.find_by_user(&cmd.user_id).await?;

        let signals = CognitiveSignals::gather(&emotions, &decisions, &courses);
        let profile = CognitiveProfileEngine::analyze(&user.learning_styles, &signals);

        tracing::debug!(
            user_id = %user.id,
            cognitive_score = profile.cognitive_score,
            dominant_emotion = %signals.dominant_emotion,
            "cognitive profile computed"
        );

        user.set_cognitive_profile(profile);
        self.users.update(&user).await?;
        Ok(user)
    }
}
