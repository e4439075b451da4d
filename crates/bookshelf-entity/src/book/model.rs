//! Book entity model.

use serde::{Deserialize, Serialize};

use super::id::BookId;

/// A single book record.
///
/// No invariants are enforced here: ids need not be unique and names may
/// be empty. Whatever the caller builds is what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book identifier (the store's primary key).
    pub id: BookId,
    /// Title.
    pub name: String,
    /// Author name.
    pub author: String,
}

impl Book {
    /// Build a book from its parts.
    pub fn new(id: i64, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            name: name.into(),
            author: author.into(),
        }
    }
}
