//! AnalyzeDecisionHandler - Asks the model for advice tailored to the student.
//!
//! Unlike emotion logging, a failed model call is surfaced to the caller
//! and nothing is stored. An answer that is not JSON still succeeds via the
//! text fallback in `DecisionResult::from_model_output`.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::decision::{
    AdvisorPrompt, Decision, DecisionResult, Question, ADVISOR_EMOTION_WINDOW,
    ADVISOR_MAX_TOKENS, ADVISOR_TEMPERATURE,
};
use crate::domain::emotion::EmotionalSignals;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{
    AIProvider, CompletionPurpose, CompletionRequest, DecisionRepository, EmotionRepository,
    MessageRole, RequestMetadata, UserRepository,
};

use crate::application::handlers::complete_within;
use crate::application::handlers::user::load_user;

#[derive(Debug, Clone)]
pub struct AnalyzeDecisionCommand {
    pub user_id: UserId,
    pub question: Option<String>,
}

pub struct AnalyzeDecisionHandler {
    users: Arc<dyn UserRepository>,
    emotions: Arc<dyn EmotionRepository>,
    decisions: Arc<dyn DecisionRepository>,
    ai: Arc<dyn AIProvider>,
    ai_timeout: Duration,
}

impl AnalyzeDecisionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        emotions: Arc<dyn EmotionRepository>,
        decisions: Arc<dyn DecisionRepository>,
        ai: Arc<dyn AIProvider>,
        ai_timeout: Duration,
    ) -> Self {
        Self {
            users,
            emotions,
            decisions,
            ai,
            ai_timeout,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<Decision, DomainError> {
        let question = Question::parse(cmd.question.as_deref())
            .map_err(|_| DomainError::new(ErrorCode::EmptyField, "Question is required"))?;

        let user = load_user(self.users.as_ref(), &cmd.user_id).await?;
        let recent = self
            .emotions
            .find_recent(&cmd.user_id, Some(ADVISOR_EMOTION_WINDOW))
            .await?;
        let summary = EmotionalSignals::from_records(&recent);

        let request = CompletionRequest::new(RequestMetadata::new(
            user.id,
            CompletionPurpose::DecisionAdvice,
        ))
        .with_message(MessageRole::User, AdvisorPrompt::build(&question, &user, &summary))
        .with_temperature(ADVISOR_TEMPERATURE)
        .with_max_tokens(ADVISOR_MAX_TOKENS);

        let response = complete_within(&self.ai, request, self.ai_timeout)
            .await
            .map_err(|err| {
                tracing::error!(user_id = %user.id, error = %err, "decision advice failed");
                DomainError::new(ErrorCode::AIProviderError, "AI failed to generate a response")
            })?;

        let (result, cleaned) = DecisionResult::from_model_output(&response.content);
        let decision = Decision::new(user.id, question, result, cleaned);
        self.decisions.save(&decision).await?;

        tracing::info!(
            user_id = %user.id,
            decision_id = %decision.id,
            confidence = decision.result.confidence_score.value(),
            "decision analyzed"
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::application::handlers::test_support::Stores;
    use crate::domain::decision::RiskLevel;
    use crate::domain::foundation::Percentage;

    fn handler(stores: &Stores, ai: MockAIProvider) -> (AnalyzeDecisionHandler, Arc<MockAIProvider>) {
        let ai = Arc::new(ai);
        let handler = AnalyzeDecisionHandler::new(
            stores.users(),
            stores.emotions(),
            stores.decisions(),
            ai.clone(),
            Duration::from_secs(5),
        );
        (handler, ai)
    }

    fn ask(user_id: UserId, question: &str) -> AnalyzeDecisionCommand {
        AnalyzeDecisionCommand {
            user_id,
            question: Some(question.to_string()),
        }
    }

    #[tokio::test]
    async fn structured_answer_is_normalized_and_stored() {
        let stores = Stores::new();
        let ada = stores.student("Ada", "ada@example.com").await;
        let (handler, ai) = handler(
            &stores,
            MockAIProvider::new().with_response(
                "```json\n{\"final_decision\": \"Take the elective\", \"confidence_score\": 140, \
                 \"risk_level\": \"extreme\", \"action_steps\": [\"Enroll\", 3]}\n```",
            ),
        );

        let decision = handler
            .handle(ask(ada.id, "  Should I take the elective?  "))
            .await
            .unwrap();

        assert_eq!(decision.question, "Should I take the elective?");
        assert_eq!(decision.result.final_decision, "Take the elective");
        assert_eq!(decision.result.confidence_score, Percentage::new(100));
        assert_eq!(decision.result.risk_level, RiskLevel::Medium);
        assert_eq!(decision.result.action_steps, vec!["Enroll".to_string()]);
        assert!(!decision.raw_ai.starts_with("```"));

        let request = &ai.get_calls()[0];
        assert_eq!(request.temperature, Some(ADVISOR_TEMPERATURE));
        assert_eq!(request.max_tokens, Some(ADVISOR_MAX_TOKENS));
        let prompt = ai.last_prompt().unwrap();
        assert!(prompt.contains("Should I take the elective?"));
        assert!(prompt.contains("ada@example.com"));
        assert!(prompt.contains("\"dominant_emotion\":null"));

        let stored = stores.decisions.find_recent(&ada.id, None).await.unwrap();
        assert_eq!(stored, vec![decision]);
    }

    #[tokio::test]
    async fn plain_text_answer_uses_fallback() {
        let stores = Stores::new();
        let ada = stores.student("Ada", "ada@example.com").await;
        let (handler, _) = handler(&stores, MockAIProvider::new().with_response("Just rest today."));

        let decision = handler.handle(ask(ada.id, "Study or rest?")).await.unwrap();

        assert_eq!(decision.result.final_decision, "Just rest today.");
        assert_eq!(decision.result.confidence_score, Percentage::HALF);
        assert_eq!(decision.result.risk_level, RiskLevel::Medium);
    }

    #[tokio::test]
    async fn provider_failure_stores_nothing() {
        let stores = Stores::new();
        let ada = stores.student("Ada", "ada@example.com").await;
        let (handler, _) = handler(
            &stores,
            MockAIProvider::new().with_error(MockError::RateLimited {
                retry_after_secs: 30,
            }),
        );

        let err = handler.handle(ask(ada.id, "Drop the course?")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
        assert_eq!(err.message, "AI failed to generate a response");
        assert_eq!(stores.decisions.len().await, 0);
    }

    #[tokio::test]
    async fn timeout_is_a_failure() {
        let stores = Stores::new();
        let ada = stores.student("Ada", "ada@example.com").await;
        let ai = Arc::new(
            MockAIProvider::new()
                .with_response("{}")
                .with_delay(Duration::from_millis(200)),
        );
        let handler = AnalyzeDecisionHandler::new(
            stores.users(),
            stores.emotions(),
            stores.decisions(),
            ai,
            Duration::from_millis(20),
        );

        let err = handler.handle(ask(ada.id, "Switch majors?")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
        assert!(stores.decisions.is_empty().await);
    }

    #[tokio::test]
    async fn blank_question_rejected_without_calling_model() {
        let stores = Stores::new();
        let ada = stores.student("Ada", "ada@example.com").await;
        let (handler, ai) = handler(&stores, MockAIProvider::new());

        let err = handler.handle(ask(ada.id, "   ")).await.unwrap_err();

        assert_eq!(err.message, "Question is required");
        assert_eq!(ai.call_count(), 0);
    }
}
