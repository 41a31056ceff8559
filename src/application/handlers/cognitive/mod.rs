//! Cognitive profile analysis.

mod analyze_profile;

pub use analyze_profile::{AnalyzeProfileCommand, AnalyzeProfileHandler};
