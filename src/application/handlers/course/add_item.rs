//! AddCourseItemHandler - Appends lessons, modules, labs and assessments.

use std::sync::Arc;

use crate::domain::course::{Course, ItemSection};
use crate::domain::foundation::{CourseId, DomainError, UserId};
use crate::ports::CourseRepository;

use super::{load_owned_course, required_title};

#[derive(Debug, Clone)]
pub struct AddCourseItemCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub section: ItemSection,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddAssessmentCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub title: Option<String>,
    pub max_score: Option<f64>,
    pub score: Option<f64>,
}

pub struct AddCourseItemHandler {
    courses: Arc<dyn CourseRepository>,
}

impl AddCourseItemHandler {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }

    /// Adds an uncompleted lesson, module or lab. Returns the updated course.
    pub async fn handle(&self, cmd: AddCourseItemCommand) -> Result<Course, DomainError> {
        let title = required_title(cmd.title.as_deref())?;
        let mut course =
            load_owned_course(self.courses.as_ref(), &cmd.user_id, &cmd.course_id).await?;

        course.add_item(cmd.section, &title)?;
        self.courses.update(&course).await?;
        Ok(course)
    }

    /// Adds an assessment. Returns the updated course.
    pub async fn handle_assessment(&self, cmd: AddAssessmentCommand) -> Result<Course, DomainError> {
        let title = required_title(cmd.title.as_deref())?;
        let mut course =
            load_owned_course(self.courses.as_ref(), &cmd.user_id, &cmd.course_id).await?;

        course.add_assessment(&title, cmd.max_score, cmd.score)?;
        self.courses.update(&course).await?;
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Stores;
    use crate::domain::course::DEFAULT_MAX_SCORE;
    use crate::domain::foundation::{ErrorCode, Percentage};

    async fn setup() -> (Stores, Course, AddCourseItemHandler) {
        let stores = Stores::new();
        let course = Course::new(UserId::new(), "Chemistry", "CH1", None).unwrap();
        stores.courses.save(&course).await.unwrap();
        let handler = AddCourseItemHandler::new(stores.courses());
        (stores, course, handler)
    }

    fn item(course: &Course, section: ItemSection, title: Option<&str>) -> AddCourseItemCommand {
        AddCourseItemCommand {
            user_id: course.user_id,
            course_id: course.id,
            section,
            title: title.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn adds_item_and_persists() {
        let (stores, course, handler) = setup().await;

        let updated = handler
            .handle(item(&course, ItemSection::Module, Some(" Organic ")))
            .await
            .unwrap();

        assert_eq!(updated.modules.len(), 1);
        assert_eq!(updated.modules[0].title, "Organic");
        assert!(!updated.modules[0].completed);
        assert_eq!(updated.progress_percent, Percentage::ZERO);
        assert_eq!(stores.courses.find_by_id(&course.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn missing_title_rejected() {
        let (_, course, handler) = setup().await;
        let err = handler
            .handle(item(&course, ItemSection::Lab, None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.message, "title required");
    }

    #[tokio::test]
    async fn assessment_defaults_max_score_and_counts_toward_progress() {
        let (_, course, handler) = setup().await;

        let updated = handler
            .handle_assessment(AddAssessmentCommand {
                user_id: course.user_id,
                course_id: course.id,
                title: Some("Midterm".into()),
                max_score: None,
                score: Some(70.0),
            })
            .await
            .unwrap();

        assert_eq!(updated.assessments[0].max_score, DEFAULT_MAX_SCORE);
        assert_eq!(updated.progress_percent, Percentage::new(70));
    }

    #[tokio::test]
    async fn score_above_max_rejected() {
        let (_, course, handler) = setup().await;

        let err = handler
            .handle_assessment(AddAssessmentCommand {
                user_id: course.user_id,
                course_id: course.id,
                title: Some("Quiz".into()),
                max_score: Some(10.0),
                score: Some(11.0),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn foreign_course_not_found() {
        let (_, course, handler) = setup().await;
        let err = handler
            .handle(AddCourseItemCommand {
                user_id: UserId::new(),
                ..item(&course, ItemSection::Lesson, Some("Intro"))
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CourseNotFound);
    }
}
