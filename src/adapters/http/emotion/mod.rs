//! HTTP adapter for emotion logging and summaries.

mod dto;
mod handlers;
mod routes;

pub use dto::{EmotionResponse, LogEmotionRequest, LogEmotionResponse};
pub use handlers::EmotionHandlers;
pub use routes::emotion_routes;
