//! Request and response bodies for course endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::CourseView;
use crate::domain::course::{Assessment, Course, CourseItem, CourseMetrics};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddAssessmentRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// A null or absent score clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetScoreRequest {
    #[serde(default)]
    pub score: Option<f64>,
}

/// A course, with metrics when the endpoint computes them.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub code: String,
    pub semester: String,
    pub lessons: Vec<CourseItem>,
    pub modules: Vec<CourseItem>,
    pub labs: Vec<CourseItem>,
    pub assessments: Vec<Assessment>,
    pub progress_percent: u8,
    pub created_at: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<CourseMetrics>,
}

impl CourseResponse {
    fn build(course: Course, metrics: Option<CourseMetrics>) -> Self {
        Self {
            id: course.id.to_string(),
            user_id: course.user_id.to_string(),
            title: course.title,
            code: course.code,
            semester: course.semester,
            lessons: course.lessons,
            modules: course.modules,
            labs: course.labs,
            assessments: course.assessments,
            progress_percent: course.progress_percent.value(),
            created_at: course.created_at.to_string(),
            metrics,
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self::build(course, None)
    }
}

impl From<CourseView> for CourseResponse {
    fn from(view: CourseView) -> Self {
        Self::build(view.course, Some(view.metrics))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub course_id: String,
    pub progress_percent: u8,
}
