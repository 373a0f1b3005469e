// Gateway module for the conversation relay - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod engine;

// Public re-exports - the ONLY way to access relay functionality
pub use engine::{ConversationRelay, SubmitOutcome};
