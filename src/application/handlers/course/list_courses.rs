//! ListCoursesHandler - Every course of a student with metrics attached.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CourseRepository, EmotionRepository};

use super::{recent_stress, CourseView};

#[derive(Debug, Clone)]
pub struct ListCoursesQuery {
    pub user_id: UserId,
}

pub struct ListCoursesHandler {
    courses: Arc<dyn CourseRepository>,
    emotions: Arc<dyn EmotionRepository>,
}

impl ListCoursesHandler {
    pub fn new(courses: Arc<dyn CourseRepository>, emotions: Arc<dyn EmotionRepository>) -> Self {
        Self { courses, emotions }
    }

    pub async fn handle(&self, query: ListCoursesQuery) -> Result<Vec<CourseView>, DomainError> {
        let stress = recent_stress(self.emotions.as_ref(), &query.user_id).await?;
        let courses = self.courses.find_by_user(&query.user_id).await?;
        Ok(courses
            .into_iter()
            .map(|course| CourseView::evaluate(course, stress))
            .collect())
    }
}
