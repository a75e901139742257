//! `lorelink` - resolve @mentions in campaign notes from the command line.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lorelink_config::ConfigManager;

mod cli;
mod commands;
mod main_helpers;
mod targets;

use cli::{Cli, Commands};
use main_helpers::initialize_tracing;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigManager::load()?,
    };
    let config = manager.config();
    initialize_tracing(config);
    tracing::debug!(path = ?manager.config_path(), "configuration ready");

    match args.command {
        Commands::Tokenize(tokenize_args) => commands::tokenize::handle(config, tokenize_args),
        Commands::Render(render_args) => commands::render::handle(config, render_args),
        Commands::Suggest(suggest_args) => commands::suggest::handle(config, &suggest_args),
        Commands::Extract(extract_args) => commands::extract::handle(config, extract_args),
        Commands::Compose(compose_args) => commands::compose::handle(config, compose_args),
        Commands::Lint(lint_args) => commands::lint::handle(&lint_args),
    }
}
