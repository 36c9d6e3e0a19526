//! Error types for value access and text codec operations.

use crate::kind::Kind;
use thiserror::Error;

/// Errors that can occur when accessing a value or running the codec.
///
/// Conversions (`convert`, `as_*`) never produce one of these; they fall
/// back to the target's default value instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContainerError {
    /// A checked access asked for a kind other than the active one.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// A read-only map lookup did not find the key.
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),

    /// A read-only sequence lookup was past the end.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The input text was not a valid document.
    /// Line and column are 1-based.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A preallocating generator needed more room than the size estimate gave it.
    #[error("generated text exceeds estimated capacity of {capacity} bytes (needed {required})")]
    CapacityExceeded { capacity: usize, required: usize },
}

/// Convenience alias used throughout nested-container.
pub type Result<T> = std::result::Result<T, ContainerError>;
