// crates/gazetteer-core/src/value.rs

//! # Value Coercion
//!
//! Raw gazetteer columns are plain text. [`coerce`] turns one column into a
//! typed [`Scalar`], recognizing numbers only when the syntax is unambiguous.

use serde::{Deserialize, Serialize};

/// A coerced column value. `null` is modelled as `Option::None` by [`coerce`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric view of the value. Text never converts.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Scalar::Integer(i) => Some(Number::Integer(*i)),
            Scalar::Float(f) => Some(Number::Float(*f)),
            Scalar::Text(_) => None,
        }
    }

    /// Integer view of the value. Floats are not truncated.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// A numeric value that remembers whether it was written as an integer, so
/// `350` is written back as `350` and `350.0` as `350.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Converts a raw text field into `null | integer | float | string`.
///
/// - empty or whitespace-only input is `None`
/// - input containing a `.` that parses as a finite decimal is a float
/// - input that parses as a signed base-10 integer is an integer
/// - anything else is the trimmed text
///
/// ```rust
/// use gazetteer_core::value::{coerce, Scalar};
///
/// assert_eq!(coerce("  "), None);
/// assert_eq!(coerce("3.866667"), Some(Scalar::Float(3.866667)));
/// assert_eq!(coerce("-12"), Some(Scalar::Integer(-12)));
/// assert_eq!(coerce("12,5"), Some(Scalar::Text("12,5".into())));
/// ```
pub fn coerce(text: &str) -> Option<Scalar> {
    let value = text.trim();
    if value.is_empty() {
        return None;
    }

    let parsed = if value.contains('.') {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Scalar::Float)
    } else {
        value.parse::<i64>().ok().map(Scalar::Integer)
    };

    Some(parsed.unwrap_or_else(|| Scalar::Text(value.to_owned())))
}

/// `true` when `value` is non-empty and made only of ASCII digits.
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
