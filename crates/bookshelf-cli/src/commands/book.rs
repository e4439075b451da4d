//! Book CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use bookshelf_core::error::AppError;
use bookshelf_entity::book::{Book, BookId};

use super::Cli;

/// Arguments for book commands
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Book subcommand
    #[command(subcommand)]
    pub command: BookCommand,
}

/// Book subcommands
#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// List every book in the table
    List,
    /// Show one book
    Get {
        /// Book ID
        id: i64,
    },
    /// Store a book (replaces any book with the same ID)
    Create(BookFields),
    /// Store a book (creates it if the ID is new)
    Update(BookFields),
    /// Delete a book
    Delete {
        /// Book ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Fields of a book record
#[derive(Debug, Args)]
pub struct BookFields {
    /// Book ID
    #[arg(long)]
    pub id: i64,
    /// Title
    #[arg(short, long)]
    pub name: String,
    /// Author
    #[arg(short, long)]
    pub author: String,
}

impl From<&BookFields> for Book {
    fn from(fields: &BookFields) -> Self {
        Book::new(fields.id, fields.name.clone(), fields.author.clone())
    }
}

/// Book display row for table output
#[derive(Debug, Serialize, Tabled)]
struct BookRow {
    /// Book ID
    id: i64,
    /// Title
    name: String,
    /// Author
    author: String,
}

impl From<Book> for BookRow {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
            author: book.author,
        }
    }
}

/// Execute book commands
pub async fn execute(args: &BookArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(cli)?;
    let store = super::create_store(&config).await?;
    let books = super::create_book_service(&store);

    match &args.command {
        BookCommand::List => {
            let rows: Vec<BookRow> = books.list().await?.into_iter().map(BookRow::from).collect();
            output::print_list(&rows, format);
        }
        BookCommand::Get { id } => match books.get_by_id(BookId(*id)).await? {
            Some(book) => output::print_item(&BookRow::from(book), format),
            None => output::print_warning(&format!("Book {} not found", id)),
        },
        BookCommand::Create(fields) => {
            tracing::info!(id = fields.id, "Creating book");
            books.create(&Book::from(fields)).await?;
            output::print_success(&format!("Book {} stored", fields.id));
        }
        BookCommand::Update(fields) => {
            tracing::info!(id = fields.id, "Updating book");
            books.update(&Book::from(fields)).await?;
            output::print_success(&format!("Book {} stored", fields.id));
        }
        BookCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete book {} from '{}'?", id, store.table_name()))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    tracing::debug!(id, "Delete cancelled at prompt");
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            tracing::info!(id, table = %store.table_name(), "Deleting book");
            books.delete(BookId(*id)).await?;
            output::print_success(&format!("Book {} deleted", id));
        }
    }

    Ok(())
}
