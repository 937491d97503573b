//! Builder Blueprint CLI
//!
//! Segment, clean, and reformat AI-generated text from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use blueprint_cli::cli::{Cli, Command};
use blueprint_cli::{commands, config_handlers, input};
use blueprint_core::{ConfigManager, FormatterConfig};
use blueprint_text::TextFormatter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = match run(cli) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("{e:#}");
            return Err(e);
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<String> {
    let config_path = cli.config.as_deref();

    let output = match cli.command {
        Command::Parse {
            input,
            clean,
            pretty,
        } => {
            let text = input::read_input(input.as_deref())?;
            commands::cmd_parse(&formatter(config_path)?, &text, clean, pretty)?
        }
        Command::Clean { input } => {
            let text = input::read_input(input.as_deref())?;
            commands::cmd_clean(&formatter(config_path)?, &text)
        }
        Command::Format { input, clean } => {
            let text = input::read_input(input.as_deref())?;
            commands::cmd_format(&formatter(config_path)?, &text, clean)
        }
        Command::Outline { input } => {
            let text = input::read_input(input.as_deref())?;
            commands::cmd_outline(&formatter(config_path)?, &text)
        }
        Command::Excerpt { input, max_chars } => {
            let text = input::read_input(input.as_deref())?;
            commands::cmd_excerpt(&formatter(config_path)?, &text, max_chars)
        }
        Command::Config { action } => config_handlers::handle_config_command(config_path, action)?,
    };
    Ok(output)
}

fn formatter(config_path: Option<&str>) -> Result<TextFormatter> {
    let config = FormatterConfig::load(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "Using formatter configuration");
    Ok(TextFormatter::new(config))
}
