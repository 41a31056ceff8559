//! Emotion domain - Logged emotions and the signals derived from them.
//!
//! - `record` - Emotion records and their validated input
//! - `interpretation` - Per-record model interpretation with a fixed fallback
//! - `signals` - Windowed aggregation shared by profile, dashboard and advisor
//! - `insight` - Dominant emotion, intensity and stability summary

mod insight;
mod interpretation;
mod record;
mod signals;

pub use insight::{EmotionInsight, Stability, INSIGHT_WINDOW};
pub use interpretation::{AIInterpretation, InterpretationPrompt, INTERPRETATION_TEMPERATURE};
pub use record::{EmotionRecord, NewEmotion, DEFAULT_INTENSITY};
pub use signals::EmotionalSignals;
