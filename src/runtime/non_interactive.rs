use anyhow::Result;
use std::sync::Arc;

use crate::models::Model;
use crate::relay::{ConversationRelay, SubmitOutcome};
use crate::session::SessionState;

/// One-shot runner: sends a single prompt through the same relay the
/// interactive UI uses and returns the reply text.
pub struct NonInteractiveRunner {
    relay: ConversationRelay,
}

impl NonInteractiveRunner {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            relay: ConversationRelay::new(model),
        }
    }

    /// Execute the prompt against a fresh session.
    pub async fn execute(&self, prompt: &str) -> Result<String> {
        let mut session = SessionState::new();

        match self.relay.submit(&mut session, prompt).await {
            SubmitOutcome::Ignored => anyhow::bail!("prompt is empty"),
            SubmitOutcome::Failed(message) => anyhow::bail!(message),
            SubmitOutcome::Replied => Ok(session
                .transcript()
                .last()
                .map(|turn| turn.text.clone())
                .unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockModel;
    use crate::utils::RemoteServiceError;

    #[tokio::test]
    async fn test_execute_returns_the_reply_text() {
        let mut mock = MockModel::new();
        mock.expect_generate()
            .returning(|_| Ok("Wie würdest du anfangen?".to_string()));

        let runner = NonInteractiveRunner::new(Arc::new(mock));
        let reply = runner.execute("5+3").await.unwrap();
        assert_eq!(reply, "Wie würdest du anfangen?");
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_prompts() {
        let mut mock = MockModel::new();
        mock.expect_generate().times(0);

        let runner = NonInteractiveRunner::new(Arc::new(mock));
        assert!(runner.execute("   ").await.is_err());
    }

    #[tokio::test]
    async fn test_execute_surfaces_remote_failures() {
        let mut mock = MockModel::new();
        mock.expect_generate().returning(|_| {
            Err(RemoteServiceError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        });

        let runner = NonInteractiveRunner::new(Arc::new(mock));
        let err = runner.execute("Was ist die Franchise?").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}
