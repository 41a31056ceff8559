//! Course handlers.
//!
//! Every id-based operation goes through `load_owned_course`, so a course
//! belonging to someone else is indistinguishable from a missing one.

mod add_item;
mod create_course;
mod delete_course;
mod get_course;
mod list_courses;
mod set_assessment_score;
mod toggle_item;

pub use add_item::{AddAssessmentCommand, AddCourseItemCommand, AddCourseItemHandler};
pub use create_course::{CreateCourseCommand, CreateCourseHandler};
pub use delete_course::{DeleteCourseCommand, DeleteCourseHandler};
pub use get_course::{GetCourseHandler, GetCourseProgressHandler, GetCourseQuery};
pub use list_courses::{ListCoursesHandler, ListCoursesQuery};
pub use set_assessment_score::{SetAssessmentScoreCommand, SetAssessmentScoreHandler};
pub use toggle_item::{ToggleCourseItemCommand, ToggleCourseItemHandler};

use serde::Serialize;

use crate::domain::course::{Course, CourseMetrics, MetricEngine, FATIGUE_STRESS_WINDOW};
use crate::domain::emotion::EmotionalSignals;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, Percentage, UserId};
use crate::ports::{CourseRepository, EmotionRepository};

/// A course with freshly computed progress and metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseView {
    #[serde(flatten)]
    pub course: Course,
    #[serde(flatten)]
    pub metrics: CourseMetrics,
}

impl CourseView {
    /// Refreshes progress in memory and evaluates metrics. Nothing is written.
    pub fn evaluate(mut course: Course, stress_avg: Percentage) -> Self {
        course.refresh_progress();
        let metrics = MetricEngine::evaluate(&course, stress_avg);
        Self { course, metrics }
    }
}

pub(crate) fn course_not_found() -> DomainError {
    DomainError::new(ErrorCode::CourseNotFound, "Course not found")
}

/// Loads a course owned by `user_id`, or fails with `CourseNotFound`.
pub(crate) async fn load_owned_course(
    courses: &dyn CourseRepository,
    user_id: &UserId,
    course_id: &CourseId,
) -> Result<Course, DomainError> {
    match courses.find_by_id(course_id).await? {
        Some(course) if course.is_owned_by(user_id) => Ok(course),
        Some(_) => {
            tracing::debug!(user_id = %user_id, course_id = %course_id, "course belongs to another user");
            Err(course_not_found())
        }
        None => Err(course_not_found()),
    }
}

/// Stress average feeding the fatigue metric, 50 without readings.
pub(crate) async fn recent_stress(
    emotions: &dyn EmotionRepository,
    user_id: &UserId,
) -> Result<Percentage, DomainError> {
    let recent = emotions
        .find_recent(user_id, Some(FATIGUE_STRESS_WINDOW))
        .await?;
    Ok(EmotionalSignals::from_records(&recent)
        .stress_avg
        .unwrap_or(Percentage::HALF))
}

fn title_required() -> DomainError {
    DomainError::new(ErrorCode::EmptyField, "title required")
}

/// Trims a required item title.
pub(crate) fn required_title(title: Option<&str>) -> Result<String, DomainError> {
    let title = title.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(title_required());
    }
    Ok(title.to_string())
}
