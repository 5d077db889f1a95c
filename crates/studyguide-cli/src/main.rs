//! Study Guide CLI - generate summaries, Q&A and flashcards from a document.

use clap::Parser;
use studyguide_cli::cli::{ConfigAction, ConfigArgs};
use studyguide_cli::commands;
use studyguide_cli::config::api_key_from_env;
use studyguide_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> studyguide_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    studyguide_cli::init_logging(cli.verbose);

    // Load config; a broken file is fatal unless it is being replaced
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    if !color_enabled {
        colored::control::set_override(false);
    }

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Generate(args) => {
            commands::execute_generate(args, &config, api_key_from_env(), &formatter)?;
        }
        Command::Prompts(args) => {
            commands::execute_prompts(args, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
