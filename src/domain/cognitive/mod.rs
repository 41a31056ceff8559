//! Cognitive domain - Five-axis cognitive profile derived from activity history.
//!
//! - `profile` - The cached profile shape and cognitive style
//! - `engine` - Signal gathering and profile synthesis

mod engine;
mod profile;

pub use engine::{CognitiveProfileEngine, CognitiveSignals, PROFILE_DECISION_WINDOW, PROFILE_EMOTION_WINDOW};
pub use profile::{CognitiveProfile, CognitiveStyle};
