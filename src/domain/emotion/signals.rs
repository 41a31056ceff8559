//! Windowed aggregation over recent emotion records.
//!
//! Every consumer (cognitive profile, dashboard, decision advisor, course
//! fatigue) reads the same statistics from a window of the most recent
//! records. Averages are `None` when no value contributed to them, so each
//! caller applies its own default.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::Percentage;

use super::EmotionRecord;

/// Statistics over a window of emotion records, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionalSignals {
    pub dominant_emotion: Option<String>,
    pub avg_intensity: Option<Percentage>,
    #[serde(skip)]
    pub distinct_emotions: usize,
    pub focus_avg: Option<Percentage>,
    pub stress_avg: Option<Percentage>,
    pub motivation_avg: Option<Percentage>,
}

impl EmotionalSignals {
    /// Aggregates a window of records ordered newest first.
    pub fn from_records(records: &[EmotionRecord]) -> Self {
        let labels: Vec<&str> = records.iter().map(|r| r.emotion.as_str()).collect();

        Self {
            dominant_emotion: dominant_label(&labels).map(str::to_string),
            avg_intensity: Percentage::mean(records.iter().map(|r| r.intensity)),
            distinct_emotions: labels.iter().collect::<HashSet<_>>().len(),
            focus_avg: Percentage::mean(
                records.iter().filter_map(|r| r.ai.as_ref().and_then(|ai| ai.focus_score)),
            ),
            stress_avg: Percentage::mean(
                records.iter().filter_map(|r| r.ai.as_ref().and_then(|ai| ai.stress_score)),
            ),
            motivation_avg: Percentage::mean(
                records.iter().filter_map(|r| r.ai.as_ref().and_then(|ai| ai.motivation_score)),
            ),
        }
    }

    /// True when the window held no records.
    pub fn is_empty(&self) -> bool {
        self.distinct_emotions == 0
    }
}

/// Most frequent label. Ties go to the label seen first in traversal order.
pub(crate) fn dominant_label<'a>(labels: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(*label).or_default() += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for label in labels {
        let count = counts[label];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((*label, count)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::{AIInterpretation, NewEmotion};
    use crate::domain::foundation::UserId;

    fn record(emotion: &str, intensity: i64, scores: Option<(u8, u8, u8)>) -> EmotionRecord {
        let input = NewEmotion::parse(Some(emotion), Some(intensity)).unwrap();
        let mut rec = EmotionRecord::new(UserId::new(), input, AIInterpretation::fallback());
        rec.ai = scores.map(|(focus, stress, motivation)| AIInterpretation {
            focus_score: Some(Percentage::new(focus)),
            stress_score: Some(Percentage::new(stress)),
            motivation_score: Some(Percentage::new(motivation)),
            ..AIInterpretation::fallback()
        });
        rec
    }

    #[test]
    fn empty_window_has_no_values() {
        let signals = EmotionalSignals::from_records(&[]);
        assert!(signals.is_empty());
        assert_eq!(signals.dominant_emotion, None);
        assert_eq!(signals.avg_intensity, None);
        assert_eq!(signals.stress_avg, None);
    }

    #[test]
    fn dominant_tie_goes_to_most_recent() {
        assert_eq!(dominant_label(&["Calm", "Happy", "Happy", "Calm"]), Some("Calm"));
        assert_eq!(dominant_label(&["Sad", "Calm", "Calm"]), Some("Calm"));
        assert_eq!(dominant_label(&[]), None);
    }

    #[test]
    fn averages_skip_records_without_interpretation() {
        let records = vec![
            record("Happy", 80, Some((70, 20, 90))),
            record("Happy", 60, None),
            record("Tired", 41, Some((40, 61, 50))),
        ];
        let signals = EmotionalSignals::from_records(&records);

        assert_eq!(signals.dominant_emotion.as_deref(), Some("Happy"));
        assert_eq!(signals.avg_intensity, Some(Percentage::new(60)));
        assert_eq!(signals.distinct_emotions, 2);
        assert_eq!(signals.focus_avg, Some(Percentage::new(55)));
        // (20 + 61) / 2 = 40.5 rounds up
        assert_eq!(signals.stress_avg, Some(Percentage::new(41)));
        assert_eq!(signals.motivation_avg, Some(Percentage::new(70)));
    }

    #[test]
    fn serializes_absent_values_as_null() {
        let json = serde_json::to_value(EmotionalSignals::from_records(&[])).unwrap();
        assert!(json["dominant_emotion"].is_null());
        assert!(json["avg_intensity"].is_null());
        assert!(json.get("distinct_emotions").is_none());
    }
}
