//! Bounded LLM calls.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse};

/// Runs one completion, failing with `AIError::Timeout` once `limit` elapses.
pub async fn complete_within(
    provider: &Arc<dyn AIProvider>,
    request: CompletionRequest,
    limit: Duration,
) -> Result<CompletionResponse, AIError> {
    match tokio::time::timeout(limit, provider.complete(request)).await {
        Ok(result) => result,
        Err(_) => Err(AIError::timeout(limit.as_secs())),
    }
}
