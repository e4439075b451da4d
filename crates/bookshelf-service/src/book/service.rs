//! Book CRUD use cases.

use std::sync::Arc;

use bookshelf_core::result::AppResult;
use bookshelf_core::traits::repository::Repository;
use bookshelf_database::repositories::BookRepository;
use bookshelf_entity::book::{Book, BookId};

/// Book use-case service.
///
/// Each method forwards to the repository method of the same name.
/// Results and errors come back exactly as the repository produced them.
#[derive(Clone)]
pub struct BookService {
    /// Book repository.
    repo: Arc<dyn BookRepository>,
}

impl std::fmt::Debug for BookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookService").finish_non_exhaustive()
    }
}

impl BookService {
    /// Creates a new book service.
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Stores a book, overwriting any book with the same id.
    pub async fn create(&self, book: &Book) -> AppResult<()> {
        self.repo.create(book).await
    }

    /// Looks up a book. `None` when no book has this id.
    pub async fn get_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        self.repo.get_by_id(&id).await
    }

    /// Stores a book, creating it when the id is new.
    pub async fn update(&self, book: &Book) -> AppResult<()> {
        self.repo.update(book).await
    }

    /// Deletes a book. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: BookId) -> AppResult<()> {
        self.repo.delete(&id).await
    }

    /// Lists every stored book.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repo.list().await
    }
}
