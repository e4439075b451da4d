//! In-memory book repository.
//!
//! Same contract as the DynamoDB repository, without a network: unconditional
//! puts, `None` for missing ids, idempotent deletes. Used by tests and local
//! tooling.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookshelf_core::result::AppResult;
use bookshelf_core::traits::repository::Repository;
use bookshelf_entity::book::{Book, BookId};

/// Book repository backed by a map from id to book.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBookRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with books. Later duplicates win.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().map(|b| (b.id, b)).collect()),
        }
    }

    /// Number of stored books.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the repository holds no books.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl Repository<Book, BookId> for InMemoryBookRepository {
    async fn create(&self, book: &Book) -> AppResult<()> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &BookId) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }

    async fn delete(&self, id: &BookId) -> AppResult<()> {
        self.books.write().await.remove(id);
        Ok(())
    }

    /// Books come back in ascending id order.
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}
