//! The typed value container and the per-kind behavior behind it.
//!
//! [`TypedValue`] holds exactly one value of a fixed primitive kind. What a
//! "default", a "rendering", and a "parse" mean for each kind is captured by
//! the [`Primitive`] trait, implemented once for each Rust type that backs a
//! [`PrimitiveKind`].

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::{PropertyError, Result};
use crate::kind::PrimitiveKind;
use crate::property::PropertyValue;

/// Number of digits after the decimal point when rendering `Float64` values.
pub const FLOAT_PRECISION: usize = 5;

/// A Rust type that backs one [`PrimitiveKind`].
///
/// The trait is closed in practice: it is implemented for `String`, `i32`,
/// `i64` and `f64`, and the projections tie each implementation to exactly
/// one variant of [`PropertyValue`].
pub trait Primitive: Clone + PartialEq + fmt::Debug + Sized {
    /// The kind tag for this type.
    const KIND: PrimitiveKind;

    /// The zero value: empty text, `0`, or `0.0`.
    fn default_value() -> Self;

    /// Canonical text form of a value.
    fn render(&self) -> String;

    /// Parse text according to this kind's grammar.
    fn parse_text(text: &str) -> Result<Self>;

    /// Wrap a container into the property value union.
    fn wrap(value: TypedValue<Self>) -> PropertyValue;

    /// Borrow the container out of the union if the variant matches.
    fn project(value: &PropertyValue) -> Option<&TypedValue<Self>>;

    /// Mutably borrow the container out of the union if the variant matches.
    fn project_mut(value: &mut PropertyValue) -> Option<&mut TypedValue<Self>>;
}

/// Holds a single value of one primitive kind.
///
/// The container performs no validation; parsing and type checks are the
/// [`Property`](crate::Property) layer's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypedValue<T>(T);

impl<T: Primitive> TypedValue<T> {
    /// Create a container holding `value`.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The kind of the contained value.
    pub fn kind(&self) -> PrimitiveKind {
        T::KIND
    }

    /// Borrow the contained value.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Replace the contained value.
    pub fn set(&mut self, value: T) {
        self.0 = value;
    }

    /// Reset to the kind's zero value.
    pub fn reset(&mut self) {
        self.0 = T::default_value();
    }

    /// Canonical text form.
    pub fn render(&self) -> String {
        self.0.render()
    }
}

impl<T: Primitive> Default for TypedValue<T> {
    fn default() -> Self {
        Self(T::default_value())
    }
}

impl<T: Primitive> fmt::Display for TypedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn parse_integer<T>(kind: PrimitiveKind, text: &str) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    text.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PropertyError::OutOfRange {
            kind,
            input: text.to_string(),
        },
        _ => PropertyError::InvalidValue {
            kind,
            input: text.to_string(),
        },
    })
}

impl Primitive for String {
    const KIND: PrimitiveKind = PrimitiveKind::Text;

    fn default_value() -> Self {
        String::new()
    }

    fn render(&self) -> String {
        format!("\"{self}\"")
    }

    fn parse_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }

    fn wrap(value: TypedValue<Self>) -> PropertyValue {
        PropertyValue::Text(value)
    }

    fn project(value: &PropertyValue) -> Option<&TypedValue<Self>> {
        match value {
            PropertyValue::Text(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut PropertyValue) -> Option<&mut TypedValue<Self>> {
        match value {
            PropertyValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i32 {
    const KIND: PrimitiveKind = PrimitiveKind::Int32;

    fn default_value() -> Self {
        0
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn parse_text(text: &str) -> Result<Self> {
        parse_integer(Self::KIND, text)
    }

    fn wrap(value: TypedValue<Self>) -> PropertyValue {
        PropertyValue::Int32(value)
    }

    fn project(value: &PropertyValue) -> Option<&TypedValue<Self>> {
        match value {
            PropertyValue::Int32(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut PropertyValue) -> Option<&mut TypedValue<Self>> {
        match value {
            PropertyValue::Int32(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i64 {
    const KIND: PrimitiveKind = PrimitiveKind::Int64;

    fn default_value() -> Self {
        0
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn parse_text(text: &str) -> Result<Self> {
        parse_integer(Self::KIND, text)
    }

    fn wrap(value: TypedValue<Self>) -> PropertyValue {
        PropertyValue::Int64(value)
    }

    fn project(value: &PropertyValue) -> Option<&TypedValue<Self>> {
        match value {
            PropertyValue::Int64(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut PropertyValue) -> Option<&mut TypedValue<Self>> {
        match value {
            PropertyValue::Int64(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for f64 {
    const KIND: PrimitiveKind = PrimitiveKind::Float64;

    fn default_value() -> Self {
        0.0
    }

    fn render(&self) -> String {
        format!("{:.*}", FLOAT_PRECISION, self)
    }

    fn parse_text(text: &str) -> Result<Self> {
        let invalid = || PropertyError::InvalidValue {
            kind: Self::KIND,
            input: text.to_string(),
        };

        // `f64::from_str` accepts "inf" and "nan"; they are not decimal numbers.
        let unsigned = text.trim_start_matches(['+', '-']).to_ascii_lowercase();
        if matches!(unsigned.as_str(), "inf" | "infinity" | "nan") {
            return Err(invalid());
        }

        let value = text.parse::<f64>().map_err(|_| invalid())?;
        if value.is_infinite() {
            return Err(PropertyError::OutOfRange {
                kind: Self::KIND,
                input: text.to_string(),
            });
        }
        Ok(value)
    }

    fn wrap(value: TypedValue<Self>) -> PropertyValue {
        PropertyValue::Float64(value)
    }

    fn project(value: &PropertyValue) -> Option<&TypedValue<Self>> {
        match value {
            PropertyValue::Float64(v) => Some(v),
            _ => None,
        }
    }

    fn project_mut(value: &mut PropertyValue) -> Option<&mut TypedValue<Self>> {
        match value {
            PropertyValue::Float64(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero_values() {
        assert_eq!(TypedValue::<String>::default().get(), "");
        assert_eq!(*TypedValue::<i32>::default().get(), 0);
        assert_eq!(*TypedValue::<i64>::default().get(), 0);
        assert_eq!(*TypedValue::<f64>::default().get(), 0.0);
    }

    #[test]
    fn reset_restores_default() {
        let mut v = TypedValue::new(42i64);
        v.reset();
        assert_eq!(*v.get(), 0);
    }

    #[test]
    fn text_renders_quoted() {
        assert_eq!(TypedValue::new("hello".to_string()).render(), "\"hello\"");
        assert_eq!(TypedValue::<String>::default().render(), "\"\"");
    }

    #[test]
    fn integers_render_plain_decimal() {
        assert_eq!(TypedValue::new(-17i32).render(), "-17");
        assert_eq!(TypedValue::new(i64::MAX).render(), "9223372036854775807");
    }

    #[test]
    fn float_renders_five_decimals() {
        assert_eq!(TypedValue::new(3.1f64).render(), "3.10000");
        assert_eq!(TypedValue::new(0.0f64).render(), "0.00000");
        assert_eq!(TypedValue::new(-2.123456f64).render(), "-2.12346");
    }

    #[test]
    fn display_matches_render() {
        let v = TypedValue::new(7i32);
        assert_eq!(format!("{v}"), v.render());
    }

    #[test]
    fn kind_follows_type() {
        assert_eq!(TypedValue::<String>::default().kind(), PrimitiveKind::Text);
        assert_eq!(TypedValue::<i32>::default().kind(), PrimitiveKind::Int32);
        assert_eq!(TypedValue::<i64>::default().kind(), PrimitiveKind::Int64);
        assert_eq!(TypedValue::<f64>::default().kind(), PrimitiveKind::Float64);
    }

    #[test]
    fn int32_range_boundaries() {
        assert_eq!(i32::parse_text("2147483647").unwrap(), i32::MAX);
        assert_eq!(i32::parse_text("-2147483648").unwrap(), i32::MIN);
        assert!(matches!(
            i32::parse_text("2147483648"),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            i32::parse_text("-2147483649"),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn int64_accepts_beyond_int32() {
        assert_eq!(i64::parse_text("2147483648").unwrap(), 2_147_483_648);
        assert!(matches!(
            i64::parse_text("9223372036854775808"),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn integer_rejects_stray_characters() {
        for bad in ["", "12abc", "abc", " 12", "12 ", "1.5", "+-5", "-"] {
            assert!(
                matches!(i32::parse_text(bad), Err(PropertyError::InvalidValue { .. })),
                "expected InvalidValue for {bad:?}"
            );
        }
        assert_eq!(i32::parse_text("+5").unwrap(), 5);
    }

    #[test]
    fn float_parses_decimal_forms() {
        assert_eq!(f64::parse_text("3.14").unwrap(), 3.14);
        assert_eq!(f64::parse_text("-0.5").unwrap(), -0.5);
        assert_eq!(f64::parse_text("+2").unwrap(), 2.0);
        assert_eq!(f64::parse_text("10.").unwrap(), 10.0);
    }

    #[test]
    fn float_rejects_malformed_text() {
        for bad in ["", "1.2.3", "abc", ".", "inf", "-infinity", "NaN"] {
            assert!(
                matches!(f64::parse_text(bad), Err(PropertyError::InvalidValue { .. })),
                "expected InvalidValue for {bad:?}"
            );
        }
    }

    #[test]
    fn float_overflow_is_out_of_range() {
        let huge = format!("1{}.0", "0".repeat(400));
        assert!(matches!(
            f64::parse_text(&huge),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn text_parse_keeps_input_verbatim() {
        assert_eq!(String::parse_text("  spaced \"q\" ").unwrap(), "  spaced \"q\" ");
    }
}
