use crate::constants::UI_DEFAULT_VIEWPORT_HEIGHT;
use crate::persona::Persona;
use crate::relay::{ConversationRelay, SubmitOutcome};
use crate::session::SessionState;

/// Application state
///
/// Owns the session exclusively; the relay and persona are read-only
/// collaborators. All mutation happens through the methods below,
/// driven by the single event loop in `ui.rs`.
pub struct App {
    /// Conversation state for this session
    pub session: SessionState,
    /// Relay between the UI and the model
    pub relay: ConversationRelay,
    /// Fixed persona for this run
    pub persona: Persona,
    /// Model name for display
    pub model_name: String,
    /// Inline error from the last failed submit
    pub error: Option<String>,
    /// Transient status line (e.g. while waiting for a reply)
    pub status_message: Option<String>,
    /// Is the app running?
    pub running: bool,
    /// Scroll offset for the transcript view
    pub scroll_offset: u16,
}

impl App {
    /// Create a new app instance
    pub fn new(relay: ConversationRelay, persona: Persona, model_name: String) -> Self {
        Self {
            session: SessionState::new(),
            relay,
            persona,
            model_name,
            error: None,
            status_message: None,
            running: true,
            scroll_offset: 0,
        }
    }

    /// Submit the pending input through the relay. Returns whether
    /// session state changed, so the caller decides about redrawing.
    pub async fn submit_pending(&mut self) -> bool {
        let input = self.session.pending_input().to_string();
        let outcome = self.relay.submit(&mut self.session, &input).await;

        match &outcome {
            SubmitOutcome::Replied => {
                self.error = None;
                self.scroll_offset = 0;
            }
            SubmitOutcome::Failed(message) => {
                self.error = Some(message.clone());
                self.scroll_offset = 0;
            }
            SubmitOutcome::Ignored => {}
        }

        outcome.state_changed()
    }

    /// Clear the conversation. Returns whether anything changed.
    pub fn clear_chat(&mut self) -> bool {
        self.error = None;
        self.scroll_offset = 0;
        self.relay.clear(&mut self.session)
    }

    pub fn push_input(&mut self, c: char) {
        self.session.pending_input_mut().push(c);
    }

    pub fn pop_input(&mut self) {
        self.session.pending_input_mut().pop();
    }

    /// Scroll transcript view up
    pub fn scroll_up(&mut self, amount: u16) {
        // Count actual lines that will be rendered
        let mut total_lines = 0u16;
        for turn in self.session.transcript() {
            total_lines += turn.text.lines().count().max(1) as u16;
            total_lines += 1; // blank line between turns
        }

        let max_scroll = total_lines.saturating_sub(UI_DEFAULT_VIEWPORT_HEIGHT);
        self.scroll_offset = self.scroll_offset.saturating_add(amount).min(max_scroll);
    }

    /// Scroll transcript view down
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockModel;
    use crate::persona::PersonaVariant;
    use crate::utils::RemoteServiceError;
    use std::sync::Arc;

    fn app_with(mock: MockModel) -> App {
        App::new(
            ConversationRelay::new(Arc::new(mock)),
            PersonaVariant::Math.persona(),
            "test-model".to_string(),
        )
    }

    #[tokio::test]
    async fn test_submit_pending_reports_change_and_clears_error() {
        let mut mock = MockModel::new();
        mock.expect_generate()
            .returning(|_| Ok("Antwort".to_string()));

        let mut app = app_with(mock);
        app.error = Some("old error".to_string());
        app.session.pending_input_mut().push_str("5+3");

        assert!(app.submit_pending().await);
        assert!(app.error.is_none());
        assert_eq!(app.session.transcript().len(), 2);
        assert_eq!(app.session.pending_input(), "");
    }

    #[tokio::test]
    async fn test_submit_pending_surfaces_failure_inline() {
        let mut mock = MockModel::new();
        mock.expect_generate().returning(|_| {
            Err(RemoteServiceError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        });

        let mut app = app_with(mock);
        app.session.pending_input_mut().push_str("Was ist die Franchise?");

        assert!(app.submit_pending().await);
        let error = app.error.as_deref().unwrap();
        assert!(error.contains("quota exceeded"));
        // The orphaned user turn stays visible
        assert_eq!(app.session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_pending_input_changes_nothing() {
        let mut mock = MockModel::new();
        mock.expect_generate().times(0);

        let mut app = app_with(mock);
        assert!(!app.submit_pending().await);
        assert!(app.session.is_empty());
    }

    #[tokio::test]
    async fn test_clear_chat_resets_session_and_error() {
        let mut mock = MockModel::new();
        mock.expect_generate()
            .returning(|_| Ok("Antwort".to_string()));

        let mut app = app_with(mock);
        app.session.pending_input_mut().push_str("Frage");
        app.submit_pending().await;
        app.error = Some("stale".to_string());

        assert!(app.clear_chat());
        assert!(app.session.is_empty());
        assert!(app.error.is_none());
    }
}
