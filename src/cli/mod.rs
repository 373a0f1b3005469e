// Gateway module for CLI - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod args;
mod commands;

// Public re-exports - the ONLY way to access CLI functionality
pub use args::{Cli, Commands};
pub use commands::run_command;
