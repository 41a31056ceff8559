//! CreateCourseHandler - Command handler for adding a course.

use std::sync::Arc;

use crate::domain::course::Course;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::CourseRepository;

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub user_id: UserId,
    pub title: Option<String>,
    pub code: Option<String>,
    pub semester: Option<String>,
}

pub struct CreateCourseHandler {
    courses: Arc<dyn CourseRepository>,
}

impl CreateCourseHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    pub async fn handle(&self, cmd: CreateCourseCommand) -> Result<Course, DomainError> {
        let course = Course::new(
            cmd.user_id,
            cmd.title.as_deref().unwrap_or_default(),
            cmd.code.as_deref().unwrap_or_default(),
            cmd.semester.as_deref(),
        )
        .map_err(|_| DomainError::new(ErrorCode::EmptyField, "title and code required"))?;

        self.courses.save(&course).await?;
        tracing::info!(user_id = %course.user_id, course_id = %course.id, "course created");
        Ok(course)
    }
}
