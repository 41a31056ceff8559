//! Dashboard domain - Read-only composition of live signals and cached scores.

mod aggregator;

pub use aggregator::{
    CachedScores, DashboardAggregator, DashboardUser, DashboardView, RealTimeSignals,
    DASHBOARD_DECISION_WINDOW, DASHBOARD_EMOTION_WINDOW,
};
