//! # bookshelf-service
//!
//! Use-case service layer for Bookshelf. Services follow constructor
//! injection: the repository they drive is provided at construction time
//! behind an `Arc`.

pub mod book;

pub use book::BookService;
