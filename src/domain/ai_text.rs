//! Helpers for handling free-form text returned by language models.

/// Removes markdown code fences (` ```json ` and ` ``` `) and trims.
///
/// Models frequently wrap JSON answers in fences even when asked not to.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Returns at most `max_chars` characters of `text`, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
