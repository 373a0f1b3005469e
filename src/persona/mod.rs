// Gateway module for personas - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod text;
mod variant;

// Public re-exports - the ONLY way to access persona functionality
pub use variant::{Persona, PersonaVariant};
