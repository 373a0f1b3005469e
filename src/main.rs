use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use tutorbot::{
    app::load_config,
    cli::{run_command, Cli, Commands},
    models::{GeminiModel, Model},
    relay::ConversationRelay,
    runtime::NonInteractiveRunner,
    tui::{run_ui, App},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging if verbose
    if cli.verbose {
        init_logger();
    }

    // Handle subcommands that don't start a chat
    if let Some(command) = &cli.command {
        if !matches!(command, Commands::Chat) {
            return run_command(command);
        }
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        let toml_str = std::fs::read_to_string(config_path)?;
        toml::from_str(&toml_str)?
    } else {
        load_config().unwrap_or_default()
    };

    // A missing API key halts startup here: no model client is
    // constructed and no UI is served.
    let api_key = config.api_key()?;

    let variant = cli.persona.unwrap_or(config.default_persona);
    let persona = variant.persona();
    let model_name = cli
        .model
        .clone()
        .unwrap_or_else(|| config.model.name.clone());

    let model: Arc<dyn Model> = Arc::new(GeminiModel::new(
        api_key,
        model_name.clone(),
        persona.system_instruction,
        persona.settings.clone(),
    )?);

    // Non-interactive mode: one prompt, one reply
    if let Some(prompt) = cli.prompt {
        let runner = NonInteractiveRunner::new(model);
        let reply = runner.execute(&prompt).await?;
        println!("{}", reply);
        return Ok(());
    }

    // Interactive chat
    let relay = ConversationRelay::new(model);
    let app = App::new(relay, persona, model_name);
    run_ui(app).await
}
