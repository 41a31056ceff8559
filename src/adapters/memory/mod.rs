//! In-memory repository adapters.
//!
//! Backing store for the handler and HTTP test suites. Nothing here
//! survives a restart.

mod course_repository;
mod decision_repository;
mod emotion_repository;
mod user_repository;

pub use course_repository::InMemoryCourseRepository;
pub use decision_repository::InMemoryDecisionRepository;
pub use emotion_repository::InMemoryEmotionRepository;
pub use user_repository::InMemoryUserRepository;

use crate::domain::foundation::Timestamp;

/// Newest first; records sharing a timestamp keep reverse insertion order.
fn newest_first<T: Clone>(
    items: &[T],
    keep: impl Fn(&T) -> bool,
    at: impl Fn(&T) -> Timestamp,
    limit: Option<usize>,
) -> Vec<T> {
    let mut selected: Vec<T> = items.iter().rev().filter(|item| keep(item)).cloned().collect();
    selected.sort_by_key(|item| std::cmp::Reverse(at(item)));
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected
}
