//! Book use cases.

pub mod service;

pub use service::BookService;
