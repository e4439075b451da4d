//! Book entity and identifier.

pub mod id;
pub mod model;

pub use id::BookId;
pub use model::Book;
