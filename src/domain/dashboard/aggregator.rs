//! Dashboard Aggregator.
//!
//! Composes live signals from recent emotions, recent decisions and all
//! courses with scores previously cached on the user. Nothing is written.

use serde::Serialize;

use crate::domain::course::{Course, ProgressCalculator};
use crate::domain::decision::Decision;
use crate::domain::emotion::{EmotionRecord, EmotionalSignals};
use crate::domain::foundation::Percentage;
use crate::domain::user::User;

/// Number of recent emotion records read by the dashboard.
pub const DASHBOARD_EMOTION_WINDOW: usize = 20;

/// Number of recent decisions read by the dashboard.
pub const DASHBOARD_DECISION_WINDOW: usize = 10;

const DEFAULT_CPI: Percentage = Percentage::new(60);
const DEFAULT_STABILITY: Percentage = Percentage::new(60);
const DEFAULT_ALIGNMENT: &str = "Neutral";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealTimeSignals {
    pub dominant_emotion: Option<String>,
    pub emotion_avg_intensity: Percentage,
    pub emotion_variety: usize,
    pub focus_avg: Percentage,
    pub stress_avg: Percentage,
    pub motivation_avg: Percentage,
    pub decision_confidence_avg: Percentage,
    pub course_engagement: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedScores {
    pub cognitive_performance_index: Percentage,
    pub emotional_stability_score: Percentage,
    pub cognitive_alignment: String,
}

/// The dashboard read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub user: DashboardUser,
    pub real_time: RealTimeSignals,
    pub cached_ai: CachedScores,
}

/// Stateless dashboard composer.
pub struct DashboardAggregator;

impl DashboardAggregator {
    /// Builds the dashboard from windows of emotions and decisions (newest
    /// first) and the full course list.
    pub fn compose(
        user: &User,
        emotions: &[EmotionRecord],
        decisions: &[Decision],
        courses: &[Course],
    ) -> DashboardView {
        let signals = EmotionalSignals::from_records(emotions);
        let cache = user.dashboard_cache.clone().unwrap_or_default();

        DashboardView {
            user: DashboardUser {
                name: user.name.clone(),
                email: user.email.clone(),
            },
            real_time: RealTimeSignals {
                dominant_emotion: signals.dominant_emotion,
                emotion_avg_intensity: signals.avg_intensity.unwrap_or(Percentage::ZERO),
                emotion_variety: signals.distinct_emotions,
                focus_avg: signals.focus_avg.unwrap_or(Percentage::HALF),
                stress_avg: signals.stress_avg.unwrap_or(Percentage::HALF),
                motivation_avg: signals.motivation_avg.unwrap_or(Percentage::HALF),
                decision_confidence_avg: Decision::average_confidence(decisions)
                    .unwrap_or(Percentage::HALF),
                course_engagement: ProgressCalculator::engagement(courses)
                    .unwrap_or(Percentage::ZERO),
            },
            cached_ai: CachedScores {
                cognitive_performance_index: cache.cpi.unwrap_or(DEFAULT_CPI),
                emotional_stability_score: cache
                    .emotional_stability_score
                    .unwrap_or(DEFAULT_STABILITY),
                cognitive_alignment: cache
                    .cognitive_alignment
                    .unwrap_or_else(|| DEFAULT_ALIGNMENT.to_string()),
            },
        }
    }
}
