//! Result type alias
//!
//! Convenience alias using [`RateError`] as the error type for fallible
//! operations throughout the crate.

use super::errors::RateError;

/// Result type alias for rate engine operations.
pub type Result<T> = std::result::Result<T, RateError>;
