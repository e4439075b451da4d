//! Convenience result type alias for Bookshelf.

use crate::error::AppError;

/// A specialized `Result` type for Bookshelf operations.
pub type AppResult<T> = Result<T, AppError>;
