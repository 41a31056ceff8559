//! HTTP routes for course endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    add_assessment, add_lab, add_lesson, add_module, create_course, delete_course, get_course,
    get_progress, list_courses, set_assessment_score, toggle_item, CourseHandlers,
};

/// Mounted at `/api/courses`.
pub fn course_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/", post(create_course).get(list_courses))
        .route("/:id", get(get_course).delete(delete_course))
        .route("/:id/progress", get(get_progress))
        .route("/:id/lesson", put(add_lesson))
        .route("/:id/module", put(add_module))
        .route("/:id/lab", put(add_lab))
        .route("/:id/assessment", put(add_assessment))
        .route("/:id/assessment/:item_id/score", put(set_assessment_score))
        .route("/:id/:section/:item_id/toggle", post(toggle_item))
        .with_state(handlers)
}
