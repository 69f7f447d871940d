use thiserror::Error;

use crate::kind::PrimitiveKind;

/// Errors produced by property operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    /// The text does not follow the grammar of the target kind.
    #[error("invalid {kind} value: {input:?}")]
    InvalidValue { kind: PrimitiveKind, input: String },

    /// The text is well-formed but the number does not fit the target kind.
    #[error("{kind} value out of range: {input:?}")]
    OutOfRange { kind: PrimitiveKind, input: String },

    /// A value of one kind was offered to a property of another kind.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },

    /// A kind name that is not one of the supported kinds.
    #[error("unknown property kind: {0}")]
    UnknownKind(String),
}

/// Convenience type alias for property operations.
pub type Result<T> = std::result::Result<T, PropertyError>;
