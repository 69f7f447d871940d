//! Foundation types for propstore.
//!
//! This crate provides the typed-value layer that every other propstore crate
//! builds on. A property holds exactly one value of a fixed primitive kind and
//! can be parsed from, and rendered to, text.
//!
//! # Key Types
//!
//! - [`PrimitiveKind`] — The closed set of supported value kinds
//! - [`Primitive`] — Per-kind behavior: defaults, rendering, parsing
//! - [`TypedValue`] — Container for a single value of one primitive kind
//! - [`Property`] — A kind-tagged value with validation and error state
//! - [`PropertyError`] — Parse and type-mismatch failures

pub mod error;
pub mod kind;
pub mod property;
pub mod value;

pub use error::{PropertyError, Result};
pub use kind::PrimitiveKind;
pub use property::{Property, PropertyValue};
pub use value::{Primitive, TypedValue};
