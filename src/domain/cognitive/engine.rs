//! Cognitive Profile Engine - Synthesizes a five-axis profile from history.
//!
//! Inputs are the student's recent emotions, recent decisions and all of
//! their courses. Each axis is a weighted blend of the resulting signals:
//!
//! | Axis                | Blend                                           |
//! |---------------------|-------------------------------------------------|
//! | processing_speed    | 0.6 focus + 0.4 engagement                      |
//! | pattern_recognition | 0.5 confidence + 0.3 focus + 0.2 (100 - stress) |
//! | stress_resilience   | 0.7 (100 - stress) + 0.3 motivation             |
//! | problem_solving     | 0.5 focus + 0.5 confidence                      |
//! | goal_orientation    | 0.6 motivation + 0.4 engagement                 |

use crate::domain::course::{Course, ProgressCalculator};
use crate::domain::decision::Decision;
use crate::domain::emotion::{EmotionRecord, EmotionalSignals};
use crate::domain::foundation::Percentage;

use super::{CognitiveProfile, CognitiveStyle};

/// Number of recent emotion records read for profile analysis.
pub const PROFILE_EMOTION_WINDOW: usize = 15;

/// Number of recent decisions read for profile analysis.
pub const PROFILE_DECISION_WINDOW: usize = 10;

/// Value assumed for any emotion or decision signal with no history.
const NO_HISTORY_SIGNAL: Percentage = Percentage::new(55);

/// Threshold checks. Each yields its strength when passed, otherwise its improvement.
const FOCUS_CHECK: (&str, &str) = ("Strong sustained attention", "Improve focus consistency");
const MOTIVATION_CHECK: (&str, &str) =
    ("High intrinsic motivation", "Build motivation through goal setting");
const CALM_CHECK: (&str, &str) = ("Good stress tolerance", "Need better stress management");
const CONFIDENCE_CHECK: (&str, &str) = ("Confident decision-maker", "Increase decision confidence");
const ENGAGEMENT_CHECK: (&str, &str) =
    ("Consistent academic engagement", "Increase learning engagement");

/// Signals feeding the profile, with no-history defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitiveSignals {
    pub focus: Percentage,
    pub stress: Percentage,
    pub motivation: Percentage,
    pub intensity: Percentage,
    pub dominant_emotion: String,
    pub decision_confidence: Percentage,
    pub course_engagement: Percentage,
}

impl CognitiveSignals {
    /// Derives signals from windows of emotions and decisions (newest first)
    /// and the full course list.
    pub fn gather(emotions: &[EmotionRecord], decisions: &[Decision], courses: &[Course]) -> Self {
        let emotional = EmotionalSignals::from_records(emotions);

        Self {
            focus: emotional.focus_avg.unwrap_or(NO_HISTORY_SIGNAL),
            stress: emotional.stress_avg.unwrap_or(NO_HISTORY_SIGNAL),
            motivation: emotional.motivation_avg.unwrap_or(NO_HISTORY_SIGNAL),
            intensity: emotional.avg_intensity.unwrap_or(Percentage::HALF),
            dominant_emotion: emotional
                .dominant_emotion
                .unwrap_or_else(|| "Neutral".to_string()),
            decision_confidence: Decision::average_confidence(decisions)
                .unwrap_or(NO_HISTORY_SIGNAL),
            course_engagement: ProgressCalculator::engagement(courses).unwrap_or(Percentage::ZERO),
        }
    }
}

/// Stateless engine producing cognitive profiles.
pub struct CognitiveProfileEngine;

impl CognitiveProfileEngine {
    /// Builds a complete profile from declared learning styles and signals.
    pub fn analyze(learning_styles: &[String], signals: &CognitiveSignals) -> CognitiveProfile {
        let focus = signals.focus.as_f64();
        let calm = signals.stress.inverse().as_f64();
        let motivation = signals.motivation.as_f64();
        let confidence = signals.decision_confidence.as_f64();
        let engagement = signals.course_engagement.as_f64();

        let processing_speed = Percentage::from_score(0.6 * focus + 0.4 * engagement);
        let pattern_recognition =
            Percentage::from_score(0.5 * confidence + 0.3 * focus + 0.2 * calm);
        let stress_resilience = Percentage::from_score(0.7 * calm + 0.3 * motivation);
        let problem_solving = Percentage::from_score(0.5 * focus + 0.5 * confidence);
        let goal_orientation = Percentage::from_score(0.6 * motivation + 0.4 * engagement);

        let cognitive_score = Percentage::mean([
            processing_speed,
            pattern_recognition,
            stress_resilience,
            problem_solving,
            goal_orientation,
        ])
        .unwrap_or_default()
        .value();

        let checks = [
            (signals.focus.value() > 70, FOCUS_CHECK),
            (signals.motivation.value() > 70, MOTIVATION_CHECK),
            (signals.stress.inverse().value() > 70, CALM_CHECK),
            (signals.decision_confidence.value() > 70, CONFIDENCE_CHECK),
            (signals.course_engagement.value() > 60, ENGAGEMENT_CHECK),
        ];
        let mut strengths = Vec::new();
        let mut areas_to_improve = Vec::new();
        for (passed, (strength, improvement)) in checks {
            if passed {
                strengths.push(strength.to_string());
            } else {
                areas_to_improve.push(improvement.to_string());
            }
        }

        CognitiveProfile {
            cognitive_style: CognitiveStyle::from_learning_styles(learning_styles),
            processing_speed,
            pattern_recognition,
            stress_resilience,
            problem_solving,
            goal_orientation,
            cognitive_score,
            strengths,
            areas_to_improve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{DecisionResult, Question};
    use crate::domain::emotion::{AIInterpretation, NewEmotion};
    use crate::domain::foundation::UserId;

    fn pct(v: u8) -> Percentage {
        Percentage::new(v)
    }

    fn signals(focus: u8, stress: u8, motivation: u8, confidence: u8, engagement: u8) -> CognitiveSignals {
        CognitiveSignals {
            focus: pct(focus),
            stress: pct(stress),
            motivation: pct(motivation),
            intensity: pct(50),
            dominant_emotion: "Neutral".into(),
            decision_confidence: pct(confidence),
            course_engagement: pct(engagement),
        }
    }

    #[test]
    fn no_history_uses_defaults() {
        let gathered = CognitiveSignals::gather(&[], &[], &[]);
        assert_eq!(gathered, signals(55, 55, 55, 55, 0));
    }

    #[test]
    fn profile_for_empty_history() {
        let profile = CognitiveProfileEngine::analyze(&[], &signals(55, 55, 55, 55, 0));

        assert_eq!(profile.cognitive_style, CognitiveStyle::AdaptiveLearner);
        assert_eq!(profile.processing_speed.value(), 33);
        assert_eq!(profile.pattern_recognition.value(), 53);
        assert_eq!(profile.stress_resilience.value(), 48);
        assert_eq!(profile.problem_solving.value(), 55);
        assert_eq!(profile.goal_orientation.value(), 33);
        assert_eq!(profile.cognitive_score, 44);
        assert!(profile.strengths.is_empty());
        assert_eq!(profile.areas_to_improve.len(), 5);
        assert_eq!(profile.areas_to_improve[0], "Improve focus consistency");
    }

    #[test]
    fn profile_for_strong_student() {
        let styles = vec!["Auditory".to_string()];
        let profile = CognitiveProfileEngine::analyze(&styles, &signals(80, 20, 90, 76, 70));

        assert_eq!(profile.cognitive_style, CognitiveStyle::AuditoryThinker);
        assert_eq!(profile.processing_speed.value(), 76);
        assert_eq!(profile.pattern_recognition.value(), 78);
        assert_eq!(profile.stress_resilience.value(), 83);
        assert_eq!(profile.problem_solving.value(), 78);
        assert_eq!(profile.goal_orientation.value(), 82);
        assert_eq!(profile.cognitive_score, 79);
        assert_eq!(
            profile.strengths,
            vec![
                "Strong sustained attention",
                "High intrinsic motivation",
                "Good stress tolerance",
                "Confident decision-maker",
                "Consistent academic engagement",
            ]
        );
        assert!(profile.areas_to_improve.is_empty());
    }

    #[test]
    fn thresholds_are_strict() {
        let profile = CognitiveProfileEngine::analyze(&[], &signals(70, 30, 71, 70, 60));
        assert_eq!(profile.strengths, vec!["High intrinsic motivation"]);
        assert_eq!(
            profile.areas_to_improve,
            vec![
                "Improve focus consistency",
                "Need better stress management",
                "Increase decision confidence",
                "Increase learning engagement",
            ]
        );
    }

    #[test]
    fn gather_reads_emotion_decision_and_course_history() {
        let user = UserId::new();
        let mut emotion = EmotionRecord::new(
            user,
            NewEmotion::parse(Some("Focused"), Some(70)).unwrap(),
            AIInterpretation::fallback(),
        );
        emotion.ai = Some(AIInterpretation {
            focus_score: Some(pct(90)),
            stress_score: None,
            motivation_score: Some(pct(60)),
            ..AIInterpretation::fallback()
        });
        let decision = Decision::new(
            user,
            Question::parse(Some("q")).unwrap(),
            DecisionResult {
                confidence_score: pct(88),
                ..DecisionResult::default()
            },
            String::new(),
        );
        let mut course = Course::new(user, "C", "C1", None).unwrap();
        course.progress_percent = pct(40);

        let gathered = CognitiveSignals::gather(&[emotion], &[decision], &[course]);

        assert_eq!(gathered.focus, pct(90));
        assert_eq!(gathered.stress, pct(55));
        assert_eq!(gathered.motivation, pct(60));
        assert_eq!(gathered.intensity, pct(70));
        assert_eq!(gathered.dominant_emotion, "Focused");
        assert_eq!(gathered.decision_confidence, pct(88));
        assert_eq!(gathered.course_engagement, pct(40));
    }
}
