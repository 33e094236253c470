//! Convenience result type alias for ShopDesk.

use crate::error::AppError;

/// A specialized `Result` type for ShopDesk operations.
pub type AppResult<T> = Result<T, AppError>;
