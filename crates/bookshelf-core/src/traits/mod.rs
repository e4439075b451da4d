//! Core traits defined in `bookshelf-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
