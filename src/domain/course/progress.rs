//! Progress Calculator - Weighted completion percentage for a course.
//!
//! Each of the four item categories carries a nominal weight. Categories
//! with no items are dropped and the remaining weights are renormalized so
//! they always sum to one. A course with only lessons is therefore scored
//! against lessons alone rather than against a 40% ceiling.

use crate::domain::foundation::Percentage;

use super::{Assessment, Course, CourseItem};

/// Nominal weight of the lessons category.
pub const LESSONS_WEIGHT: f64 = 0.40;

/// Nominal weight of the modules category.
pub const MODULES_WEIGHT: f64 = 0.25;

/// Nominal weight of the labs category.
pub const LABS_WEIGHT: f64 = 0.15;

/// Nominal weight of the assessments category.
pub const ASSESSMENTS_WEIGHT: f64 = 0.20;

/// Calculator for course completion percentage.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Computes the completion percentage of a course.
    pub fn calculate(course: &Course) -> Percentage {
        Self::from_parts(&course.lessons, &course.modules, &course.labs, &course.assessments)
    }

    /// Computes the completion percentage from the raw item sequences.
    pub fn from_parts(
        lessons: &[CourseItem],
        modules: &[CourseItem],
        labs: &[CourseItem],
        assessments: &[Assessment],
    ) -> Percentage {
        let categories = [
            (LESSONS_WEIGHT, lessons.len(), Self::completion_fraction(lessons)),
            (MODULES_WEIGHT, modules.len(), Self::completion_fraction(modules)),
            (LABS_WEIGHT, labs.len(), Self::completion_fraction(labs)),
            (ASSESSMENTS_WEIGHT, assessments.len(), Self::score_fraction(assessments)),
        ];

        let present_weight: f64 = categories
            .iter()
            .filter(|(_, count, _)| *count > 0)
            .map(|(weight, _, _)| weight)
            .sum();

        if present_weight == 0.0 {
            return Percentage::ZERO;
        }

        let progress: f64 = categories
            .iter()
            .filter(|(_, count, _)| *count > 0)
            .map(|(weight, _, fraction)| (weight / present_weight) * fraction)
            .sum();

        Percentage::from_score(progress * 100.0)
    }

    /// Mean cached progress across a student's courses, `None` without courses.
    pub fn engagement(courses: &[Course]) -> Option<Percentage> {
        Percentage::mean(courses.iter().map(|c| c.progress_percent))
    }

    /// Share of completed items, 0.0 for an empty slice.
    pub fn completion_fraction(items: &[CourseItem]) -> f64 {
        if items.is_empty() {
            return 0.0;
        }
        let done = items.iter().filter(|item| item.completed).count();
        done as f64 / items.len() as f64
    }

    /// Total score over total max score, 0.0 when there is nothing to divide by.
    pub fn score_fraction(assessments: &[Assessment]) -> f64 {
        let max_total: f64 = assessments.iter().map(|a| a.max_score).sum();
        if max_total <= 0.0 {
            return 0.0;
        }
        let total: f64 = assessments.iter().map(Assessment::effective_score).sum();
        total / max_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ItemId;
    use proptest::prelude::*;

    fn items(total: usize, done: usize) -> Vec<CourseItem> {
        (0..total)
            .map(|i| CourseItem {
                id: ItemId::new(),
                title: format!("item {}", i),
                completed: i < done,
            })
            .collect()
    }

    fn assessment(score: Option<f64>, max_score: f64) -> Assessment {
        Assessment {
            id: ItemId::new(),
            title: "quiz".to_string(),
            score,
            max_score,
        }
    }

    #[test]
    fn empty_course_is_zero() {
        assert_eq!(ProgressCalculator::from_parts(&[], &[], &[], &[]), Percentage::ZERO);
    }

    #[test]
    fn lessons_only_course_is_renormalized() {
        let progress = ProgressCalculator::from_parts(&items(3, 2), &[], &[], &[]);
        assert_eq!(progress.value(), 67);
    }

    #[test]
    fn full_course_uses_nominal_weights() {
        let progress = ProgressCalculator::from_parts(
            &items(5, 4),
            &items(4, 2),
            &items(2, 1),
            &[assessment(Some(70.0), 100.0)],
        );
        assert_eq!(progress.value(), 66);
    }

    #[test]
    fn ungraded_assessment_counts_as_zero() {
        let progress = ProgressCalculator::from_parts(
            &[],
            &[],
            &[],
            &[assessment(None, 50.0), assessment(Some(50.0), 50.0)],
        );
        assert_eq!(progress.value(), 50);
    }

    #[test]
    fn two_categories_split_by_relative_weight() {
        // lessons 0.40 and labs 0.15 renormalize to 8/11 and 3/11
        let progress = ProgressCalculator::from_parts(&items(1, 1), &[], &items(1, 0), &[]);
        assert_eq!(progress.value(), 73);
    }

    #[test]
    fn fully_completed_course_is_hundred() {
        let progress = ProgressCalculator::from_parts(
            &items(2, 2),
            &items(1, 1),
            &items(3, 3),
            &[assessment(Some(10.0), 10.0)],
        );
        assert_eq!(progress, Percentage::HUNDRED);
    }

    #[test]
    fn engagement_averages_cached_progress() {
        use crate::domain::foundation::UserId;

        assert_eq!(ProgressCalculator::engagement(&[]), None);

        let mut a = Course::new(UserId::new(), "A", "A1", None).unwrap();
        let b = Course::new(UserId::new(), "B", "B1", None).unwrap();
        a.progress_percent = Percentage::new(75);
        assert_eq!(ProgressCalculator::engagement(&[a, b]), Some(Percentage::new(38)));
    }

    proptest! {
        #[test]
        fn progress_stays_in_bounds(
            lessons in 0usize..20, lessons_done in 0usize..20,
            modules in 0usize..20, modules_done in 0usize..20,
            labs in 0usize..20, labs_done in 0usize..20,
            scores in proptest::collection::vec((0.0f64..=100.0, 1.0f64..=100.0), 0..6),
        ) {
            let graded: Vec<Assessment> = scores
                .into_iter()
                .map(|(score, max)| assessment(Some(score.min(max)), max))
                .collect();
            let progress = ProgressCalculator::from_parts(
                &items(lessons, lessons_done.min(lessons)),
                &items(modules, modules_done.min(modules)),
                &items(labs, labs_done.min(labs)),
                &graded,
            );
            prop_assert!(progress.value() <= 100);
        }
    }
}
