//! Emotion logging and summaries.

mod emotion_insights;
mod list_emotions;
mod log_emotion;

pub use emotion_insights::{EmotionInsightsHandler, EmotionInsightsQuery};
pub use list_emotions::{ListEmotionsHandler, ListEmotionsQuery};
pub use log_emotion::{LogEmotionCommand, LogEmotionHandler};
