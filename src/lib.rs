pub mod app;
pub mod cli;
pub mod constants;
pub mod models;
pub mod persona;
pub mod relay;
pub mod runtime;
pub mod session;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use models::{GeminiModel, Model};
pub use persona::{Persona, PersonaVariant};
pub use relay::{ConversationRelay, SubmitOutcome};
pub use session::SessionState;
pub use tui::run_ui;
pub use utils::RemoteServiceError;
