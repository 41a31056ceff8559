//! Per-course learning metrics.
//!
//! - **LLI** (Learning Load Index): coursework volume, weighted by item kind
//! - **SMI** (Skill Mastery Index): blended assessment and lesson completion
//! - **MRS** (Memory Retention Score): progress-derived retention estimate
//! - **Fatigue**: load blended with the student's recent stress
//!
//! All four are clamped to `[0, 100]`. A textual recommendation is chosen
//! from the four values.

use serde::Serialize;

use crate::domain::foundation::Percentage;

use super::{Course, ProgressCalculator};

/// Load points contributed by each weighted item unit.
const LOAD_POINTS_PER_UNIT: f64 = 5.0;

const LESSON_LOAD: f64 = 1.0;
const MODULE_LOAD: f64 = 2.0;
const LAB_LOAD: f64 = 1.5;
const ASSESSMENT_LOAD: f64 = 2.5;

/// Number of recent emotion records sampled for the fatigue stress average.
pub const FATIGUE_STRESS_WINDOW: usize = 15;

/// Study-pacing advice derived from the course metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ReduceLoad,
    ReviseAndQuiz,
    SpacedRepetition,
    Accelerate,
    SteadyPace,
}

impl Recommendation {
    /// Client-facing advice text.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::ReduceLoad => {
                "High fatigue — consider short breaks and reduce new study load."
            }
            Recommendation::ReviseAndQuiz => {
                "Revise recent lessons and attempt a short quiz to reinforce memory."
            }
            Recommendation::SpacedRepetition => {
                "Load is high but mastery is strong — schedule spaced repetition."
            }
            Recommendation::Accelerate => {
                "Strong mastery — try advanced problems or accelerate modules."
            }
            Recommendation::SteadyPace => {
                "Keep steady — 30–40 min focused sessions with short breaks."
            }
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Computed metrics for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseMetrics {
    pub lli: Percentage,
    pub smi: Percentage,
    pub mrs: Percentage,
    pub fatigue: Percentage,
    pub recommendation: Recommendation,
}

/// Stateless engine for per-course metrics.
pub struct MetricEngine;

impl MetricEngine {
    /// Computes every metric for a course given the student's recent stress average.
    pub fn evaluate(course: &Course, stress_avg: Percentage) -> CourseMetrics {
        let lli = Self::learning_load(course);
        let smi = Self::skill_mastery(course);
        let mrs = Self::memory_retention(course.progress_percent);
        let fatigue = Self::fatigue(lli, stress_avg);

        CourseMetrics {
            lli,
            smi,
            mrs,
            fatigue,
            recommendation: Self::recommend(lli, smi, mrs, fatigue),
        }
    }

    /// Learning Load Index.
    pub fn learning_load(course: &Course) -> Percentage {
        let nominal = course.lessons.len() as f64 * LESSON_LOAD
            + course.modules.len() as f64 * MODULE_LOAD
            + course.labs.len() as f64 * LAB_LOAD
            + course.assessments.len() as f64 * ASSESSMENT_LOAD;
        Percentage::from_score(nominal * LOAD_POINTS_PER_UNIT)
    }

    /// Skill Mastery Index: 60% assessment score, 40% lesson completion.
    pub fn skill_mastery(course: &Course) -> Percentage {
        let assess_pct = ProgressCalculator::score_fraction(&course.assessments) * 100.0;
        let lessons_pct = ProgressCalculator::completion_fraction(&course.lessons) * 100.0;
        Percentage::from_score(0.6 * assess_pct + 0.4 * lessons_pct)
    }

    /// Memory Retention Score.
    ///
    /// Approximated from cached progress. Item completions carry no
    /// timestamps, so recency decay would start here once they do.
    pub fn memory_retention(progress: Percentage) -> Percentage {
        Percentage::from_score((progress.as_f64() * 0.9 + 10.0).min(100.0))
    }

    /// Fatigue: 60% learning load, 40% recent stress.
    pub fn fatigue(lli: Percentage, stress_avg: Percentage) -> Percentage {
        Percentage::from_score(0.6 * lli.as_f64() + 0.4 * stress_avg.as_f64())
    }

    /// Picks the first matching recommendation rule.
    pub fn recommend(
        lli: Percentage,
        smi: Percentage,
        mrs: Percentage,
        fatigue: Percentage,
    ) -> Recommendation {
        let (lli, smi, mrs, fatigue) = (lli.value(), smi.value(), mrs.value(), fatigue.value());

        if fatigue > 75 {
            Recommendation::ReduceLoad
        } else if smi < 50 && mrs < 50 {
            Recommendation::ReviseAndQuiz
        } else if lli > 70 && smi > 75 {
            Recommendation::SpacedRepetition
        } else if smi >= 80 {
            Recommendation::Accelerate
        } else {
            Recommendation::SteadyPace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::ItemSection;
    use crate::domain::foundation::UserId;
    use proptest::prelude::*;

    fn pct(v: u8) -> Percentage {
        Percentage::new(v)
    }

    fn course_with(lessons: usize, modules: usize, labs: usize, assessments: usize) -> Course {
        let mut course = Course::new(UserId::new(), "Physics", "PHY101", None).unwrap();
        for i in 0..lessons {
            course.add_item(ItemSection::Lesson, &format!("L{}", i)).unwrap();
        }
        for i in 0..modules {
            course.add_item(ItemSection::Module, &format!("M{}", i)).unwrap();
        }
        for i in 0..labs {
            course.add_item(ItemSection::Lab, &format!("B{}", i)).unwrap();
        }
        for i in 0..assessments {
            course.add_assessment(&format!("A{}", i), Some(100.0), None).unwrap();
        }
        course
    }

    #[test]
    fn learning_load_weights_item_kinds() {
        // 2 + 2*1 + 1.5*2 + 2.5*1 = 9.5 units -> 47.5 -> 48
        let course = course_with(2, 1, 2, 1);
        assert_eq!(MetricEngine::learning_load(&course).value(), 48);
    }

    #[test]
    fn learning_load_saturates_at_hundred() {
        let course = course_with(30, 10, 10, 10);
        assert_eq!(MetricEngine::learning_load(&course), Percentage::HUNDRED);
    }

    #[test]
    fn skill_mastery_blends_assessments_and_lessons() {
        let mut course = course_with(4, 0, 0, 0);
        let first = course.lessons[0].id;
        course.toggle_item(ItemSection::Lesson, &first).unwrap();
        let quiz = course.add_assessment("Quiz", Some(20.0), Some(15.0)).unwrap();
        assert!(course.assessments.iter().any(|a| a.id == quiz));

        // 0.6 * 75 + 0.4 * 25 = 55
        assert_eq!(MetricEngine::skill_mastery(&course).value(), 55);
    }

    #[test]
    fn skill_mastery_of_empty_course_is_zero() {
        assert_eq!(MetricEngine::skill_mastery(&course_with(0, 0, 0, 0)), Percentage::ZERO);
    }

    #[test]
    fn memory_retention_tracks_progress() {
        assert_eq!(MetricEngine::memory_retention(pct(0)).value(), 10);
        assert_eq!(MetricEngine::memory_retention(pct(50)).value(), 55);
        assert_eq!(MetricEngine::memory_retention(pct(100)).value(), 100);
    }

    #[test]
    fn fatigue_is_deterministic() {
        let first = MetricEngine::fatigue(pct(80), pct(65));
        let second = MetricEngine::fatigue(pct(80), pct(65));
        // 48 + 26 = 74
        assert_eq!(first.value(), 74);
        assert_eq!(first, second);
    }

    #[test]
    fn recommendation_rules_apply_in_order() {
        use Recommendation::*;
        assert_eq!(MetricEngine::recommend(pct(100), pct(90), pct(90), pct(80)), ReduceLoad);
        assert_eq!(MetricEngine::recommend(pct(10), pct(40), pct(40), pct(20)), ReviseAndQuiz);
        assert_eq!(MetricEngine::recommend(pct(75), pct(76), pct(60), pct(60)), SpacedRepetition);
        assert_eq!(MetricEngine::recommend(pct(20), pct(80), pct(60), pct(30)), Accelerate);
        assert_eq!(MetricEngine::recommend(pct(20), pct(60), pct(40), pct(30)), SteadyPace);
    }

    #[test]
    fn recommendation_serializes_as_message() {
        let json = serde_json::to_string(&Recommendation::SteadyPace).unwrap();
        assert_eq!(json, "\"Keep steady — 30–40 min focused sessions with short breaks.\"");
    }

    #[test]
    fn evaluate_on_empty_course_with_neutral_stress() {
        let metrics = MetricEngine::evaluate(&course_with(0, 0, 0, 0), Percentage::HALF);
        assert_eq!(metrics.lli.value(), 0);
        assert_eq!(metrics.smi.value(), 0);
        assert_eq!(metrics.mrs.value(), 10);
        assert_eq!(metrics.fatigue.value(), 20);
        assert_eq!(metrics.recommendation, Recommendation::ReviseAndQuiz);
    }

    proptest! {
        #[test]
        fn learning_load_is_bounded(
            lessons in 0usize..60, modules in 0usize..30, labs in 0usize..30, assessments in 0usize..30
        ) {
            let course = course_with(lessons, modules, labs, assessments);
            prop_assert!(MetricEngine::learning_load(&course).value() <= 100);
        }

        #[test]
        fn fatigue_matches_formula(lli in 0u8..=100, stress in 0u8..=100) {
            let expected = (0.6 * f64::from(lli) + 0.4 * f64::from(stress)).round() as u8;
            prop_assert_eq!(MetricEngine::fatigue(pct(lli), pct(stress)).value(), expected);
        }
    }
}
