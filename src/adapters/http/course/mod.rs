//! HTTP adapter for courses.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddAssessmentRequest, AddItemRequest, CourseResponse, CreateCourseRequest, ProgressResponse,
    SetScoreRequest,
};
pub use handlers::CourseHandlers;
pub use routes::course_routes;
