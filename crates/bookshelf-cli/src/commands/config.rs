//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use bookshelf_core::config::AppConfig;
use bookshelf_core::error::AppError;

use super::Cli;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(cli)?;
            match format {
                OutputFormat::Table => print_summary(&config),
                OutputFormat::Json => output::print_json(&config),
            }
        }
        ConfigCommand::Validate => match super::load_config(cli) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", cli.config));
                print_summary(&config);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

fn print_summary(config: &AppConfig) {
    output::print_kv("Region", &config.store.region);
    output::print_kv(
        "Endpoint",
        config.store.endpoint.as_deref().unwrap_or("(regional default)"),
    );
    output::print_kv("Table", &config.store.table_name);
    output::print_kv(
        "Create table",
        if config.store.create_table_if_missing { "yes" } else { "no" },
    );
    output::print_kv("Log level", &config.logging.level);
    output::print_kv("Log format", &config.logging.format);
}
