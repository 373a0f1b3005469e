use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::persona::PersonaVariant;

#[derive(Parser, Debug)]
#[command(name = "tutorbot")]
#[command(version)]
#[command(about = "Terminal chat client for fixed-persona tutoring assistants", long_about = None)]
pub struct Cli {
    /// Persona variant to chat with
    #[arg(long, value_enum)]
    pub persona: Option<PersonaVariant>,

    /// Model to use (e.g. learnlm-1.5-pro-experimental)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Non-interactive prompt to send (prints the reply and exits)
    #[arg(short, long)]
    pub prompt: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// List available personas
    Personas,
    /// Start a chat session (default)
    Chat,
    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_flag_parses_both_variants() {
        let cli = Cli::parse_from(["tutorbot", "--persona", "insurance"]);
        assert_eq!(cli.persona, Some(PersonaVariant::Insurance));

        let cli = Cli::parse_from(["tutorbot", "--persona", "math"]);
        assert_eq!(cli.persona, Some(PersonaVariant::Math));
    }

    #[test]
    fn test_prompt_flag_enables_non_interactive_mode() {
        let cli = Cli::parse_from(["tutorbot", "-p", "Was ist die Franchise?"]);
        assert_eq!(cli.prompt.as_deref(), Some("Was ist die Franchise?"));
    }

    #[test]
    fn test_defaults_to_interactive_chat() {
        let cli = Cli::parse_from(["tutorbot"]);
        assert!(cli.persona.is_none());
        assert!(cli.prompt.is_none());
        assert!(cli.command.is_none());
    }
}
