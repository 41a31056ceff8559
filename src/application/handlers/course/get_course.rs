//! GetCourseHandler and GetCourseProgressHandler - Single-course queries.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, DomainError, Percentage, UserId};
use crate::ports::{CourseRepository, EmotionRepository};

use super::{load_owned_course, recent_stress, CourseView};

#[derive(Debug, Clone)]
pub struct GetCourseQuery {
    pub user_id: UserId,
    pub course_id: CourseId,
}

pub struct GetCourseHandler {
    courses: Arc<dyn CourseRepository>,
    emotions: Arc<dyn EmotionRepository>,
}

impl GetCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, emotions: Arc<dyn EmotionRepository>) -> Self {
        Self { courses, emotions }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<CourseView, DomainError> {
        let course =
            load_owned_course(self.courses.as_ref(), &query.user_id, &query.course_id).await?;
        let stress = recent_stress(self.emotions.as_ref(), &query.user_id).await?;
        Ok(CourseView::evaluate(course, stress))
    }
}

/// Recomputed completion percentage of one course.
pub struct GetCourseProgressHandler {
    courses: Arc<dyn CourseRepository>,
}

impl GetCourseProgressHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Percentage, DomainError> {
        let mut course =
            load_owned_course(self.courses.as_ref(), &query.user_id, &query.course_id).await?;
        Ok(course.refresh_progress())
    }
}
