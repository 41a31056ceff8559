//! HTTP handlers for course endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::auth::MessageResponse;
use crate::adapters::http::error::{ApiError, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    AddAssessmentCommand, AddCourseItemCommand, AddCourseItemHandler, CreateCourseCommand,
    CreateCourseHandler, DeleteCourseCommand, DeleteCourseHandler, GetCourseHandler,
    GetCourseProgressHandler, GetCourseQuery, ListCoursesHandler, ListCoursesQuery,
    SetAssessmentScoreCommand, SetAssessmentScoreHandler, ToggleCourseItemCommand,
    ToggleCourseItemHandler,
};
use crate::domain::course::ItemSection;
use crate::domain::foundation::{CourseId, UserId};

use super::dto::{
    AddAssessmentRequest, AddItemRequest, CourseResponse, CreateCourseRequest, ProgressResponse,
    SetScoreRequest,
};

#[derive(Clone)]
pub struct CourseHandlers {
    create_handler: Arc<CreateCourseHandler>,
    list_handler: Arc<ListCoursesHandler>,
    get_handler: Arc<GetCourseHandler>,
    progress_handler: Arc<GetCourseProgressHandler>,
    delete_handler: Arc<DeleteCourseHandler>,
    add_item_handler: Arc<AddCourseItemHandler>,
    toggle_handler: Arc<ToggleCourseItemHandler>,
    score_handler: Arc<SetAssessmentScoreHandler>,
}

impl CourseHandlers {
    pub fn from_state(state: &AppState) -> Self {
        let courses = state.courses.clone();
        Self {
            create_handler: Arc::new(CreateCourseHandler::new(courses.clone())),
            list_handler: Arc::new(ListCoursesHandler::new(courses.clone(), state.emotions.clone())),
            get_handler: Arc::new(GetCourseHandler::new(courses.clone(), state.emotions.clone())),
            progress_handler: Arc::new(GetCourseProgressHandler::new(courses.clone())),
            delete_handler: Arc::new(DeleteCourseHandler::new(courses.clone())),
            add_item_handler: Arc::new(AddCourseItemHandler::new(courses.clone())),
            toggle_handler: Arc::new(ToggleCourseItemHandler::new(courses.clone())),
            score_handler: Arc::new(SetAssessmentScoreHandler::new(courses)),
        }
    }
}

fn course_id(raw: &str) -> Result<CourseId, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id())
}

fn get_query(user_id: UserId, raw_id: &str) -> Result<GetCourseQuery, ApiError> {
    Ok(GetCourseQuery {
        user_id,
        course_id: course_id(raw_id)?,
    })
}

/// POST /api/courses
pub async fn create_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> Result<Response, ApiError> {
    let course = handlers
        .create_handler
        .handle(CreateCourseCommand {
            user_id: user.id,
            title: req.title,
            code: req.code,
            semester: req.semester,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))).into_response())
}

/// GET /api/courses
pub async fn list_courses(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let views = handlers
        .list_handler
        .handle(ListCoursesQuery { user_id: user.id })
        .await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/:id
pub async fn get_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let view = handlers.get_handler.handle(get_query(user.id, &id)?).await?;
    Ok(Json(view.into()))
}

/// GET /api/courses/:id/progress
pub async fn get_progress(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let query = get_query(user.id, &id)?;
    let course_id = query.course_id;
    let progress = handlers.progress_handler.handle(query).await?;
    Ok(Json(ProgressResponse {
        course_id: course_id.to_string(),
        progress_percent: progress.value(),
    }))
}

/// DELETE /api/courses/:id
pub async fn delete_course(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers
        .delete_handler
        .handle(DeleteCourseCommand {
            user_id: user.id,
            course_id: course_id(&id)?,
        })
        .await?;
    Ok(Json(MessageResponse::new("Deleted")))
}

async fn add_item(
    handlers: CourseHandlers,
    user_id: UserId,
    raw_id: &str,
    section: ItemSection,
    req: AddItemRequest,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = handlers
        .add_item_handler
        .handle(AddCourseItemCommand {
            user_id,
            course_id: course_id(raw_id)?,
            section,
            title: req.title,
        })
        .await?;
    Ok(Json(course.into()))
}

/// PUT /api/courses/:id/lesson
pub async fn add_lesson(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddItemRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    add_item(handlers, user.id, &id, ItemSection::Lesson, req).await
}

/// PUT /api/courses/:id/module
pub async fn add_module(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddItemRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    add_item(handlers, user.id, &id, ItemSection::Module, req).await
}

/// PUT /api/courses/:id/lab
pub async fn add_lab(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddItemRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    add_item(handlers, user.id, &id, ItemSection::Lab, req).await
}

/// PUT /api/courses/:id/assessment
pub async fn add_assessment(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<AddAssessmentRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = handlers
        .add_item_handler
        .handle_assessment(AddAssessmentCommand {
            user_id: user.id,
            course_id: course_id(&id)?,
            title: req.title,
            max_score: req.max_score,
            score: req.score,
        })
        .await?;
    Ok(Json(course.into()))
}

/// POST /api/courses/:id/:section/:item_id/toggle
pub async fn toggle_item(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path((id, section, item_id)): Path<(String, String, String)>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = handlers
        .toggle_handler
        .handle(ToggleCourseItemCommand {
            user_id: user.id,
            course_id: course_id(&id)?,
            section,
            item_id,
        })
        .await?;
    Ok(Json(course.into()))
}

/// PUT /api/courses/:id/assessment/:item_id/score
pub async fn set_assessment_score(
    State(handlers): State<CourseHandlers>,
    RequireAuth(user): RequireAuth,
    Path((id, item_id)): Path<(String, String)>,
    JsonBody(req): JsonBody<SetScoreRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = handlers
        .score_handler
        .handle(SetAssessmentScoreCommand {
            user_id: user.id,
            course_id: course_id(&id)?,
            assessment_id: item_id,
            score: req.score,
        })
        .await?;
    Ok(Json(course.into()))
}
