use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Model;
use crate::session::SessionState;

/// Result of processing one user action. The presentation layer uses
/// `state_changed` to decide whether to redraw, instead of being
/// forced into a re-render by the relay.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
    /// The model replied and both turns were recorded.
    Replied,
    /// The remote call failed; the message is user-visible.
    Failed(String),
}

impl SubmitOutcome {
    pub fn state_changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The control loop between the presentation layer and the model:
/// append the user turn, call the model with the full history, append
/// the reply. Every model failure is absorbed here; nothing below
/// this layer can terminate the process.
pub struct ConversationRelay {
    model: Arc<dyn Model>,
}

impl ConversationRelay {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }

    /// Process one user utterance.
    ///
    /// Whitespace-only input is silently ignored: no state change, no
    /// remote call. Otherwise the user turn is recorded first and the
    /// model is called with the entire history including it. On
    /// failure the user turn stays recorded with no reply; resending
    /// is left to the user. The pending input buffer is cleared after
    /// processing on both success and failure.
    pub async fn submit(&self, session: &mut SessionState, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        session.append_user_turn(text);

        let outcome = match self.model.generate(session.history()).await {
            Ok(reply) => {
                debug!("received reply ({} chars)", reply.len());
                session.append_assistant_turn(&reply);
                SubmitOutcome::Replied
            }
            Err(err) => {
                warn!("model call failed: {err}");
                SubmitOutcome::Failed(format!("Error: {err}"))
            }
        };

        session.clear_pending_input();
        outcome
    }

    /// Clear the whole session. Returns whether anything was cleared.
    pub fn clear(&self, session: &mut SessionState) -> bool {
        let changed = !session.is_empty() || !session.pending_input().is_empty();
        session.reset();
        changed
    }
}
