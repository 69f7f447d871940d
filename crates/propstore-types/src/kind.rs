use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;

/// The primitive kind of a property.
///
/// A property's kind is chosen when it is defined and never changes
/// afterwards. Every value stored under a property is tagged with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// UTF-8 text.
    Text,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
}

impl PrimitiveKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 4] = [Self::Text, Self::Int32, Self::Int64, Self::Float64];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        }
    }

    /// Returns `true` for the integer and floating point kinds.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => Ok(Self::Text),
            "int32" | "i32" | "int" => Ok(Self::Int32),
            "int64" | "i64" | "long" => Ok(Self::Int64),
            "float64" | "f64" | "double" => Ok(Self::Float64),
            _ => Err(PropertyError::UnknownKind(s.to_string())),
        }
    }
}
