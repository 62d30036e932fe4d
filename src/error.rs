//! Error types for address and CIDR operations.

use thiserror::Error;

/// Result type for fallible toolkit operations.
pub type Result<T> = std::result::Result<T, IpError>;

/// Errors produced by parsing, formatting and range construction.
///
/// Parse and format paths report [`IpError::InvalidFormat`] for any malformed
/// text or malformed mask. Range factories report [`IpError::InvalidRange`]
/// when the requested bounds are inverted or of mixed families; a range is a
/// precondition-checked value, not a parse result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpError {
    /// Malformed address, mask or CIDR text.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Invalid explicitly-constructed address range.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}
