use crate::models::{ChatTurn, Role};

/// Who produced a display turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Label used when rendering the transcript.
    pub fn label(&self) -> &str {
        match self {
            Self::User => "You",
            Self::Assistant => "Chatbot",
        }
    }
}

/// One message as shown to the user. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTurn {
    pub sender: Sender,
    pub text: String,
}

/// Per-session conversation state: the display transcript, the
/// model-facing history and the pending input buffer.
///
/// Owned by exactly one interaction loop and passed by reference;
/// nothing outside that loop can observe or mutate it. The transcript
/// and history stay in 1:1 correspondence under every mutation.
#[derive(Debug, Default)]
pub struct SessionState {
    transcript: Vec<DisplayTurn>,
    history: Vec<ChatTurn>,
    pending_input: String,
}

impl SessionState {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[DisplayTurn] {
        &self.transcript
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Mutable access for the input widget.
    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn clear_pending_input(&mut self) {
        self.pending_input.clear();
    }

    /// Record a user message in both the transcript and the
    /// model-facing history.
    pub fn append_user_turn(&mut self, text: &str) {
        self.transcript.push(DisplayTurn {
            sender: Sender::User,
            text: text.to_string(),
        });
        self.history.push(ChatTurn::new(Role::User, text));
        debug_assert_eq!(self.transcript.len(), self.history.len());
    }

    /// Record an assistant reply in both the transcript and the
    /// model-facing history.
    pub fn append_assistant_turn(&mut self, text: &str) {
        self.transcript.push(DisplayTurn {
            sender: Sender::Assistant,
            text: text.to_string(),
        });
        self.history.push(ChatTurn::new(Role::Model, text));
        debug_assert_eq!(self.transcript.len(), self.history.len());
    }

    /// Clear transcript, history and pending input together.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.history.clear();
        self.pending_input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionState::new();
        assert!(session.is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_appends_keep_transcript_and_history_in_step() {
        let mut session = SessionState::new();
        session.append_user_turn("5+3");
        session.append_assistant_turn("Wie würdest du diese beiden Zahlen zusammenzählen?");

        assert_eq!(session.transcript().len(), session.history().len());
        assert_eq!(session.transcript()[0].sender, Sender::User);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.transcript()[1].sender, Sender::Assistant);
        assert_eq!(session.history()[1].role, Role::Model);
        assert_eq!(session.history()[1].parts[0], session.transcript()[1].text);
    }

    #[test]
    fn test_reset_clears_all_three_buffers() {
        let mut session = SessionState::new();
        session.append_user_turn("Was ist die Franchise?");
        session.pending_input_mut().push_str("noch eine Frage");

        session.reset();

        assert!(session.is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = SessionState::new();
        session.append_user_turn("5+3");

        session.reset();
        session.reset();

        assert!(session.is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.pending_input(), "");
    }
}
