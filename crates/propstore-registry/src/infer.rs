//! Kind inference from raw text samples.
//!
//! Used when a property is defined from a bare value with no explicit kind.
//! The rules are a best-effort guess, not a grammar:
//! - Non-empty text made only of ASCII digits, `+`, `-` and `.` is numeric
//! - Numeric text containing a `.` is `Float64`
//! - Other numeric text is `Int32`, unless it overflows `i32`, then `Int64`
//! - Everything else is `Text`
//!
//! The character test is looser than the numeric grammars. `"1.2.3"` is
//! classified `Float64` and `"+-5"` is classified `Int32`; both then fail when
//! the sample is parsed into the property. Only range overflow escalates a
//! kind; malformed numeric-looking text never falls back to `Text`.

use std::num::IntErrorKind;

use propstore_types::PrimitiveKind;

/// Characters besides ASCII digits allowed in numeric-looking text.
const NUMERIC_PUNCTUATION: &[char] = &['+', '-', '.'];

/// Returns `true` if `text` is non-empty and made only of numeric characters.
///
/// # Examples
///
/// ```
/// use propstore_registry::looks_numeric;
///
/// assert!(looks_numeric("-42"));
/// assert!(looks_numeric("1.2.3"));
/// assert!(!looks_numeric(""));
/// assert!(!looks_numeric("4f"));
/// ```
pub fn looks_numeric(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || NUMERIC_PUNCTUATION.contains(&c))
}

/// Guess the kind of a property from a text sample.
///
/// # Examples
///
/// ```
/// use propstore_registry::infer_kind;
/// use propstore_types::PrimitiveKind;
///
/// assert_eq!(infer_kind("42"), PrimitiveKind::Int32);
/// assert_eq!(infer_kind("99999999999"), PrimitiveKind::Int64);
/// assert_eq!(infer_kind("3.14"), PrimitiveKind::Float64);
/// assert_eq!(infer_kind("hello"), PrimitiveKind::Text);
/// ```
pub fn infer_kind(text: &str) -> PrimitiveKind {
    if !looks_numeric(text) {
        return PrimitiveKind::Text;
    }

    if text.contains('.') {
        return PrimitiveKind::Float64;
    }

    match text.parse::<i32>() {
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            PrimitiveKind::Int64
        }
        _ => PrimitiveKind::Int32,
    }
}
