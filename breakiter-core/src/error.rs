//! Error types for boundary iteration

use thiserror::Error;

use crate::types::BreakType;

/// Errors raised while binding text or opening the boundary engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakError {
    /// `set_text` was given no text at all (distinct from the empty string)
    #[error("text must not be null")]
    NullText,

    /// The engine refused to open for this kind/locale combination
    #[error("failed to open {kind} break engine for locale '{locale}': {reason}")]
    EngineOpen {
        /// Requested break type
        kind: BreakType,
        /// Requested locale identifier
        locale: String,
        /// Engine-supplied explanation
        reason: String,
    },

    /// The locale identifier could not be parsed
    #[error("invalid locale '{locale}': {reason}")]
    InvalidLocale {
        /// The offending identifier
        locale: String,
        /// Parser explanation
        reason: String,
    },

    /// Text is longer than the engine's offset width can address
    #[error("text of {len} bytes exceeds the addressable offset range")]
    TextTooLong {
        /// Byte length of the rejected text
        len: usize,
    },

    /// The engine produced a boundary stream that violates ordering invariants
    #[error("malformed boundary stream: {reason}")]
    MalformedBoundaries {
        /// What was wrong with the stream
        reason: String,
    },

    /// The iterator's engine has already been released
    #[error("break iterator has been disposed")]
    Disposed,

    /// Unrecognised break type name
    #[error("unknown break type '{0}'")]
    UnknownBreakType(String),

    /// The engine failed to release its resources
    #[error("failed to close break engine: {0}")]
    Close(String),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, BreakError>;
