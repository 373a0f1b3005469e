use anyhow::Result;
use colored::Colorize;

use super::args::Commands;
use crate::app::init_config;
use crate::persona::PersonaVariant;

/// Handle a CLI subcommand. `Chat` is the default flow and is handled
/// by the caller, not here.
pub fn run_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Init => init_config(),
        Commands::Personas => {
            list_personas();
            Ok(())
        }
        Commands::Version => {
            println!("tutorbot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Chat => Ok(()),
    }
}

fn list_personas() {
    println!("{}", "Available personas:".bold());
    for variant in PersonaVariant::ALL {
        let persona = variant.persona();
        println!(
            "  {:<10} {}",
            variant.cli_name().green(),
            persona.title.bold()
        );
        println!("             {}", persona.subtitle);
    }
}
