//! Kind-tagged property values.
//!
//! A [`Property`] wraps one [`TypedValue`] behind a uniform interface so that
//! a single collection can hold values of every supported kind. The kind is
//! carried by the [`PropertyValue`] variant and can never change: parsing and
//! copying only ever replace the value inside the existing variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PropertyError, Result};
use crate::kind::PrimitiveKind;
use crate::value::{Primitive, TypedValue};

/// The value union behind a [`Property`], one variant per kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    Text(TypedValue<String>),
    Int32(TypedValue<i32>),
    Int64(TypedValue<i64>),
    Float64(TypedValue<f64>),
}

impl PropertyValue {
    /// The zero value for `kind`.
    pub fn default_for(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Text => Self::Text(TypedValue::default()),
            PrimitiveKind::Int32 => Self::Int32(TypedValue::default()),
            PrimitiveKind::Int64 => Self::Int64(TypedValue::default()),
            PrimitiveKind::Float64 => Self::Float64(TypedValue::default()),
        }
    }

    /// The kind tag of this variant.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Text(_) => PrimitiveKind::Text,
            Self::Int32(_) => PrimitiveKind::Int32,
            Self::Int64(_) => PrimitiveKind::Int64,
            Self::Float64(_) => PrimitiveKind::Float64,
        }
    }

    /// Canonical text form of the contained value.
    pub fn render(&self) -> String {
        match self {
            Self::Text(v) => v.render(),
            Self::Int32(v) => v.render(),
            Self::Int64(v) => v.render(),
            Self::Float64(v) => v.render(),
        }
    }
}

fn parse_into<T: Primitive>(slot: &mut TypedValue<T>, text: &str) -> Result<()> {
    slot.set(T::parse_text(text)?);
    Ok(())
}

/// A typed value with a fixed kind and a transient last-error.
///
/// Equality compares kind and value only; the last-error is diagnostic state
/// and is neither compared nor serialized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    value: PropertyValue,
    #[serde(skip)]
    last_error: Option<String>,
}

impl Property {
    /// Create a property of `kind` holding the kind's default value.
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            value: PropertyValue::default_for(kind),
            last_error: None,
        }
    }

    /// Create a property holding `value`; the kind follows from `T`.
    pub fn from_value<T: Primitive>(value: T) -> Self {
        Self {
            value: T::wrap(TypedValue::new(value)),
            last_error: None,
        }
    }

    /// Create a property of `kind` and parse `text` into it.
    pub fn parse_as(kind: PrimitiveKind, text: &str) -> Result<Self> {
        let mut property = Self::new(kind);
        property.parse(text)?;
        Ok(property)
    }

    /// The property's kind. Fixed at construction.
    pub fn kind(&self) -> PrimitiveKind {
        self.value.kind()
    }

    /// Canonical text form of the current value.
    pub fn render(&self) -> String {
        self.value.render()
    }

    /// The reason the most recent fallible call failed, if it did.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Interpret `text` as this property's kind and store it.
    ///
    /// On failure the current value is kept and the reason is recorded in
    /// [`last_error`](Self::last_error).
    pub fn parse(&mut self, text: &str) -> Result<()> {
        self.last_error = None;
        let result = match &mut self.value {
            PropertyValue::Text(v) => parse_into(v, text),
            PropertyValue::Int32(v) => parse_into(v, text),
            PropertyValue::Int64(v) => parse_into(v, text),
            PropertyValue::Float64(v) => parse_into(v, text),
        };
        self.record(result)
    }

    /// Overwrite this value with `other`'s if both have the same kind.
    pub fn copy_from(&mut self, other: &Property) -> Result<()> {
        self.last_error = None;
        let result = if other.kind() == self.kind() {
            self.value = other.value.clone();
            Ok(())
        } else {
            Err(PropertyError::TypeMismatch {
                expected: self.kind(),
                actual: other.kind(),
            })
        };
        self.record(result)
    }

    /// Borrow the typed container if this property's kind is `T::KIND`.
    pub fn typed<T: Primitive>(&self) -> Option<&TypedValue<T>> {
        T::project(&self.value)
    }

    /// The current value as `T`, or `None` if the kind differs.
    pub fn value<T: Primitive>(&self) -> Option<T> {
        self.typed::<T>().map(|v| v.get().clone())
    }

    /// Store `value` if this property's kind is `T::KIND`.
    pub fn set_value<T: Primitive>(&mut self, value: T) -> Result<()> {
        self.last_error = None;
        let expected = self.kind();
        let result = match T::project_mut(&mut self.value) {
            Some(slot) => {
                slot.set(value);
                Ok(())
            }
            None => Err(PropertyError::TypeMismatch {
                expected,
                actual: T::KIND,
            }),
        };
        self.record(result)
    }

    fn record(&mut self, result: Result<()>) -> Result<()> {
        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Self::from_value(value)
    }
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Self::from_value(value.to_string())
    }
}

impl From<i32> for Property {
    fn from(value: i32) -> Self {
        Self::from_value(value)
    }
}

impl From<i64> for Property {
    fn from(value: i64) -> Self {
        Self::from_value(value)
    }
}

impl From<f64> for Property {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}
