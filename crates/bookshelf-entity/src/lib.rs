//! # bookshelf-entity
//!
//! Domain entity models for Bookshelf. Entities are plain data: they carry
//! no validation and no knowledge of how they are stored.

pub mod book;

pub use book::{Book, BookId};
