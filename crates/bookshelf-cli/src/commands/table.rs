//! Backing table CLI commands.

use clap::{Args, Subcommand};

use crate::output;
use bookshelf_core::error::AppError;

use super::Cli;

/// Arguments for table commands
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Table subcommand
    #[command(subcommand)]
    pub command: TableCommand,
}

/// Table subcommands
#[derive(Debug, Subcommand)]
pub enum TableCommand {
    /// Check that the configured table exists and is active
    Status,
    /// Create the configured table if it does not exist
    Create,
}

/// Execute table commands
pub async fn execute(args: &TableArgs, cli: &Cli) -> Result<(), AppError> {
    let config = super::load_config(cli)?;
    let store = super::create_store(&config).await?;

    match &args.command {
        TableCommand::Status => {
            if !store.table_exists().await? {
                output::print_warning(&format!("Table '{}' does not exist", store.table_name()));
                return Ok(());
            }
            let active = store.health_check().await?;
            output::print_kv("Table", store.table_name());
            output::print_kv("Region", &config.store.region);
            output::print_kv("Active", if active { "yes" } else { "no" });
        }
        TableCommand::Create => {
            tracing::info!(table = %store.table_name(), "Ensuring table exists");
            if store.ensure_table().await? {
                output::print_success(&format!("Table '{}' created", store.table_name()));
            } else {
                output::print_warning(&format!("Table '{}' already exists", store.table_name()));
            }
        }
    }

    Ok(())
}
