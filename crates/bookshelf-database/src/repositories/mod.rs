//! Repository implementations for Bookshelf entities.

pub mod book;
pub mod memory;

pub use book::DynamoBookRepository;
pub use memory::InMemoryBookRepository;

use bookshelf_core::traits::repository::Repository;
use bookshelf_entity::book::{Book, BookId};

/// Repository capability for books.
///
/// Implemented by every `Repository<Book, BookId>`, so callers can hold an
/// `Arc<dyn BookRepository>` without naming the backing store.
pub trait BookRepository: Repository<Book, BookId> {}

impl<T> BookRepository for T where T: Repository<Book, BookId> {}
