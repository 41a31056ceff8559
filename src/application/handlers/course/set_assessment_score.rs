//! SetAssessmentScoreHandler - Records or clears an assessment score.

use std::sync::Arc;

use crate::domain::course::{Course, CourseError};
use crate::domain::foundation::{CourseId, DomainError, ItemId, UserId};
use crate::ports::CourseRepository;

use super::load_owned_course;

#[derive(Debug, Clone)]
pub struct SetAssessmentScoreCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub assessment_id: String,
    pub score: Option<f64>,
}

pub struct SetAssessmentScoreHandler {
    courses: Arc<dyn CourseRepository>,
}

impl SetAssessmentScoreHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Returns the updated course.
    pub async fn handle(&self, cmd: SetAssessmentScoreCommand) -> Result<Course, DomainError> {
        let mut course =
            load_owned_course(self.courses.as_ref(), &cmd.user_id, &cmd.course_id).await?;

        let assessment_id: ItemId = cmd
            .assessment_id
            .parse()
            .map_err(|_| CourseError::AssessmentNotFound)?;
        course.set_assessment_score(&assessment_id, cmd.score)?;
        self.courses.update(&course).await?;
        Ok(course)
    }
}
