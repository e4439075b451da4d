//! CLI command definitions and dispatch.

pub mod book;
pub mod config;
pub mod table;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use bookshelf_core::config::AppConfig;
use bookshelf_core::error::AppError;
use bookshelf_database::{DynamoBookRepository, StoreClient};
use bookshelf_service::BookService;

/// Bookshelf administration: book records on DynamoDB
#[derive(Debug, Parser)]
#[command(name = "bookshelf-cli", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay, read from the base file's directory
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Book records
    Book(book::BookArgs),
    /// Backing table management
    Table(table::TableArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Book(args) => book::execute(args, self, self.format).await,
            Commands::Table(args) => table::execute(args, self).await,
            Commands::Config(args) => config::execute(args, self, self.format).await,
        }
    }
}

/// Helper: load configuration for the selected file and environment
pub fn load_config(cli: &Cli) -> Result<AppConfig, AppError> {
    tracing::debug!(base = %cli.config, env = %cli.env, "Loading configuration");
    AppConfig::load_from(&cli.config, &cli.env)
}

/// Helper: create the store client from config
pub async fn create_store(config: &AppConfig) -> Result<StoreClient, AppError> {
    let store = StoreClient::connect(&config.store).await?;
    tracing::debug!(table = %store.table_name(), "Store client ready");
    Ok(store)
}

/// Helper: create the book service over the DynamoDB repository
pub fn create_book_service(store: &StoreClient) -> BookService {
    BookService::new(Arc::new(DynamoBookRepository::from_store(store)))
}
