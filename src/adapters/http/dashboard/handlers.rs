//! HTTP handler for the dashboard.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetDashboardHandler, GetDashboardQuery};
use crate::domain::dashboard::DashboardView;

#[derive(Clone)]
pub struct DashboardHandlers {
    dashboard_handler: Arc<GetDashboardHandler>,
}

impl DashboardHandlers {
    pub fn new(dashboard_handler: Arc<GetDashboardHandler>) -> Self {
        Self { dashboard_handler }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::new(GetDashboardHandler::new(
            state.users.clone(),
            state.emotions.clone(),
            state.decisions.clone(),
            state.courses.clone(),
        )))
    }
}

/// GET /api/dashboard
///
/// The domain view already has the response shape.
pub async fn get_dashboard(
    State(handlers): State<DashboardHandlers>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<DashboardView>, ApiError> {
    let view = handlers
        .dashboard_handler
        .handle(GetDashboardQuery { user_id: user.id })
        .await?;
    Ok(Json(view))
}
