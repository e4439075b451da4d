//! # bookshelf-core
//!
//! Core crate for Bookshelf. Contains the repository trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bookshelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
