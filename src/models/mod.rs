// Gateway module for models - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod gemini;
mod traits;
mod types;

// Public re-exports - the ONLY way to access model functionality
pub use gemini::GeminiModel;
pub use traits::Model;
pub use types::{ChatTurn, GenerationSettings, Role};

#[cfg(test)]
pub use traits::MockModel;
