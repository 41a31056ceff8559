//! Emotion insight summary.

use serde::{Serialize, Serializer};

use crate::domain::foundation::Percentage;

use super::{EmotionRecord, EmotionalSignals};

/// Number of recent records summarized by the summary and insights views.
pub const INSIGHT_WINDOW: usize = 5;

/// How varied the recent emotions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stability {
    Stable,
    Balanced,
    Fluctuating,
}

impl Stability {
    /// Classifies by the number of distinct emotion labels.
    pub fn from_distinct_count(distinct: usize) -> Self {
        match distinct {
            0..=2 => Stability::Stable,
            3..=4 => Stability::Balanced,
            _ => Stability::Fluctuating,
        }
    }
}

/// Summary of a window of emotion records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionInsight {
    /// The window was empty.
    NoData,
    Summary {
        dominant_emotion: String,
        average_intensity: Percentage,
        stability: Stability,
    },
}

impl EmotionInsight {
    /// Summarizes records ordered newest first.
    pub fn from_records(records: &[EmotionRecord]) -> Self {
        let signals = EmotionalSignals::from_records(records);
        match (signals.dominant_emotion, signals.avg_intensity) {
            (Some(dominant_emotion), Some(average_intensity)) => EmotionInsight::Summary {
                dominant_emotion,
                average_intensity,
                stability: Stability::from_distinct_count(signals.distinct_emotions),
            },
            _ => EmotionInsight::NoData,
        }
    }
}

#[derive(Serialize)]
struct InsightBody<'a> {
    stability: &'a str,
    dominant_emotion: Option<&'a str>,
    average_intensity: u8,
}

impl Serialize for EmotionInsight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            EmotionInsight::NoData => InsightBody {
                stability: "No data",
                dominant_emotion: None,
                average_intensity: 0,
            },
            EmotionInsight::Summary {
                dominant_emotion,
                average_intensity,
                stability,
            } => InsightBody {
                stability: match stability {
                    Stability::Stable => "Stable",
                    Stability::Balanced => "Balanced",
                    Stability::Fluctuating => "Fluctuating",
                },
                dominant_emotion: Some(dominant_emotion.as_str()),
                average_intensity: average_intensity.value(),
            },
        };
        body.serialize(serializer)
    }
}
