//! Result type alias for engine operations.

use crate::error::WpError;

/// Standard Result type for engine operations.
pub type WpResult<T> = Result<T, WpError>;
