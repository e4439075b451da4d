//! Bookshelf entry point.
//!
//! Wires the DynamoDB repository into the book service, lists the table
//! once and reports the result on stdout.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bookshelf_core::config::AppConfig;
use bookshelf_core::error::AppError;
use bookshelf_database::{DynamoBookRepository, StoreClient};
use bookshelf_entity::book::Book;
use bookshelf_service::BookService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Startup error: {}", e);
        eprintln!("Startup error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BOOKSHELF_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the client, repository and service, then list the table once.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bookshelf v{}", env!("CARGO_PKG_VERSION"));

    let store = StoreClient::connect(&config.store).await?;

    if config.store.create_table_if_missing {
        tracing::info!(table = %store.table_name(), "Ensuring table exists...");
        store.ensure_table().await?;
    }

    let repo = Arc::new(DynamoBookRepository::from_store(&store));
    let books = BookService::new(repo);

    match books.list().await {
        Ok(list) => print_books(&list),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list books");
            println!("{}", e);
        }
    }

    println!("Successfully created DynamoDB client");
    Ok(())
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("[]");
        return;
    }
    for book in books {
        println!("{}\t{}\t{}", book.id, book.name, book.author);
    }
}
