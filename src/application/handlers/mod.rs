//! Application handlers.
//!
//! Each handler owns the ports it needs as `Arc<dyn Port>` and exposes a
//! single `handle` method returning `Result<_, DomainError>`.

pub mod auth;
pub mod cognitive;
mod completion;
pub mod course;
pub mod dashboard;
pub mod decision;
pub mod emotion;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{LoginCommand, LoginHandler, LoginResult, RegisterCommand, RegisterHandler};
pub use cognitive::{AnalyzeProfileCommand, AnalyzeProfileHandler};
pub use completion::complete_within;
pub use course::{
    AddAssessmentCommand, AddCourseItemCommand, AddCourseItemHandler, CourseView,
    CreateCourseCommand, CreateCourseHandler, DeleteCourseCommand, DeleteCourseHandler,
    GetCourseHandler, GetCourseProgressHandler, GetCourseQuery, ListCoursesHandler,
    ListCoursesQuery, SetAssessmentScoreCommand, SetAssessmentScoreHandler,
    ToggleCourseItemCommand, ToggleCourseItemHandler,
};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use decision::{
    AnalyzeDecisionCommand, AnalyzeDecisionHandler, ListDecisionsHandler, ListDecisionsQuery,
    DECISION_LIST_LIMIT,
};
pub use emotion::{
    EmotionInsightsHandler, EmotionInsightsQuery, ListEmotionsHandler, ListEmotionsQuery,
    LogEmotionCommand, LogEmotionHandler,
};
pub use user::{GetProfileHandler, GetProfileQuery, UpdateProfileCommand, UpdateProfileHandler};
