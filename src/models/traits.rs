use async_trait::async_trait;

use super::types::ChatTurn;
use crate::utils::RemoteServiceError;

/// Core trait that all model backends must implement.
///
/// The remote service is stateless per call: conversational memory is
/// reconstructed client-side, so `generate` always receives the entire
/// ordered history, never a truncated or summarized one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Model: Send + Sync {
    /// Send the full conversation history and return the reply text.
    /// Exactly one attempt per call; no retries.
    async fn generate(&self, history: &[ChatTurn]) -> Result<String, RemoteServiceError>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
