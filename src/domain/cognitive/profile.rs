//! Cached cognitive profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Learning orientation inferred from declared learning styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CognitiveStyle {
    #[serde(rename = "Visual Reasoner")]
    VisualReasoner,
    #[serde(rename = "Auditory Thinker")]
    AuditoryThinker,
    #[serde(rename = "Hands-on Learner")]
    HandsOnLearner,
    #[serde(rename = "Adaptive Learner")]
    AdaptiveLearner,
}

impl CognitiveStyle {
    /// First match wins: Visual, then Auditory, then Kinesthetic.
    pub fn from_learning_styles(styles: &[String]) -> Self {
        let declares = |style: &str| styles.iter().any(|s| s == style);

        if declares("Visual") {
            CognitiveStyle::VisualReasoner
        } else if declares("Auditory") {
            CognitiveStyle::AuditoryThinker
        } else if declares("Kinesthetic") {
            CognitiveStyle::HandsOnLearner
        } else {
            CognitiveStyle::AdaptiveLearner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CognitiveStyle::VisualReasoner => "Visual Reasoner",
            CognitiveStyle::AuditoryThinker => "Auditory Thinker",
            CognitiveStyle::HandsOnLearner => "Hands-on Learner",
            CognitiveStyle::AdaptiveLearner => "Adaptive Learner",
        }
    }
}

impl fmt::Display for CognitiveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Five-axis cognitive profile. Axes serialize as `"<int>%"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveProfile {
    pub cognitive_style: CognitiveStyle,
    #[serde(with = "percent_string")]
    pub processing_speed: Percentage,
    #[serde(with = "percent_string")]
    pub pattern_recognition: Percentage,
    #[serde(with = "percent_string")]
    pub stress_resilience: Percentage,
    #[serde(with = "percent_string")]
    pub problem_solving: Percentage,
    #[serde(with = "percent_string")]
    pub goal_orientation: Percentage,
    pub cognitive_score: u8,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
}

impl CognitiveProfile {
    /// The five axes in declaration order.
    pub fn axes(&self) -> [Percentage; 5] {
        [
            self.processing_speed,
            self.pattern_recognition,
            self.stress_resilience,
            self.problem_solving,
            self.goal_orientation,
        ]
    }
}

mod percent_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::domain::foundation::Percentage;

    pub fn serialize<S: Serializer>(value: &Percentage, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Percentage, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let number: i64 = raw
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid percentage '{}'", raw)))?;
        Percentage::try_new(number).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn styles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn style_precedence_is_visual_auditory_kinesthetic() {
        assert_eq!(
            CognitiveStyle::from_learning_styles(&styles(&["Kinesthetic", "Visual"])),
            CognitiveStyle::VisualReasoner
        );
        assert_eq!(
            CognitiveStyle::from_learning_styles(&styles(&["Kinesthetic", "Auditory"])),
            CognitiveStyle::AuditoryThinker
        );
        assert_eq!(
            CognitiveStyle::from_learning_styles(&styles(&["Kinesthetic"])),
            CognitiveStyle::HandsOnLearner
        );
        assert_eq!(
            CognitiveStyle::from_learning_styles(&styles(&["Reading"])),
            CognitiveStyle::AdaptiveLearner
        );
    }

    #[test]
    fn profile_round_trips_with_percent_strings() {
        let profile = CognitiveProfile {
            cognitive_style: CognitiveStyle::HandsOnLearner,
            processing_speed: Percentage::new(62),
            pattern_recognition: Percentage::new(55),
            stress_resilience: Percentage::new(48),
            problem_solving: Percentage::new(70),
            goal_orientation: Percentage::new(33),
            cognitive_score: 54,
            strengths: vec![],
            areas_to_improve: vec!["Improve focus consistency".into()],
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["cognitive_style"], json!("Hands-on Learner"));
        assert_eq!(value["processing_speed"], json!("62%"));
        assert_eq!(value["cognitive_score"], json!(54));

        let back: CognitiveProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back, profile);
    }
}
