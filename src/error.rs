//! Error types for Espejo conversions

use thiserror::Error;

/// Result type for Espejo conversions
pub type Result<T> = std::result::Result<T, EspejoError>;

/// Errors that can occur when building a [`V128`](crate::V128) from
/// caller-supplied storage.
///
/// The nine emulated operations themselves never return an error: they are
/// total over every 128-bit pattern, NaN and infinity included. The only
/// fallible edge of this crate is handing it a byte slice of the wrong
/// length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EspejoError {
    /// Size mismatch between a source slice and the 128-bit value
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Expected size in bytes
        expected: usize,
        /// Actual size in bytes
        actual: usize,
    },
}
