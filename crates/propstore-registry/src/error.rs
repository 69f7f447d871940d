//! Error types for registry operations.

use propstore_types::{PrimitiveKind, PropertyError};
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The operation was given a blank property name.
    #[error("empty property name")]
    EmptyName,

    /// A property with this name already exists.
    #[error("property already defined: {name}")]
    AlreadyDefined { name: String },

    /// No property with this name exists.
    #[error("property not defined: {name}")]
    NotDefined { name: String },

    /// The offered value has a different kind than the stored property.
    #[error("type mismatch for {name}: property is {expected}, value is {actual}")]
    TypeMismatch {
        name: String,
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },

    /// A write was attempted with no usable source value.
    #[error("no value given for {name}")]
    NullValue { name: String },

    /// The stored property rejected the value.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The persistence backend failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
