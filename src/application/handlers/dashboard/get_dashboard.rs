//! GetDashboardHandler - Query handler for the student dashboard.

use std::sync::Arc;

use crate::domain::dashboard::{
    DashboardAggregator, DashboardView, DASHBOARD_DECISION_WINDOW, DASHBOARD_EMOTION_WINDOW,
};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CourseRepository, DecisionRepository, EmotionRepository, UserRepository};

use crate::application::handlers::user::load_user;

#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
}

/// Composes the dashboard. Read-only.
pub struct GetDashboardHandler {
    users: Arc<dyn UserRepository>,
    emotions: Arc<dyn EmotionRepository>,
    decisions: Arc<dyn DecisionRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl GetDashboardHandler {
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

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardView, DomainError> {
        let user = load_user(self.users.as_ref(), &query.user_id).await?;

        let emotions = self
            .emotions
            .find_recent(&query.user_id, Some(DASHBOARD_EMOTION_WINDOW))
            .await?;
        let decisions = self
            .decisions
            .find_recent(&query.user_id, Some(DASHBOARD_DECISION_WINDOW))
            .await?;
        let courses = self.courses.find_by_user(&query.user_id).await?;

        Ok(DashboardAggregator::compose(
            &user, &emotions, &decisions, &courses,
        ))
    }
}
