//! Course domain - Course structure, progress and learning metrics.
//!
//! - `course` - Course aggregate with its four item sequences
//! - `progress` - Weighted, renormalizing completion calculator
//! - `metrics` - Per-course load, mastery, retention and fatigue indices

mod course;
mod metrics;
mod progress;

pub use course::{Assessment, Course, CourseError, CourseItem, ItemSection, DEFAULT_MAX_SCORE};
pub use metrics::{CourseMetrics, MetricEngine, Recommendation, FATIGUE_STRESS_WINDOW};
pub use progress::ProgressCalculator;
