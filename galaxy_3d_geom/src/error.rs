//! Error types for the Galaxy3D geometry crate
//!
//! Only caller-facing configuration mistakes are reported through this type.
//! Numerically degenerate geometry (parallel lines, zero-area planes, zero
//! radius volumes) never produces an error, and programming errors such as
//! non-unit directions panic.

use std::fmt;

/// Result type for Galaxy3D geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value is out of range (near/far, FOV, aspect, ...)
    InvalidParameter(String),

    /// A projection matrix cannot be decomposed into frustum extents
    InvalidProjection(String),

    /// The requested transition is not implemented
    UnsupportedOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
