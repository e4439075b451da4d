//! # bookshelf-database
//!
//! DynamoDB connection management, the book item codec, and the concrete
//! repository implementations (DynamoDB and in-memory).

pub mod codec;
pub mod connection;
pub mod repositories;

pub use connection::StoreClient;
pub use repositories::{BookRepository, DynamoBookRepository, InMemoryBookRepository};
