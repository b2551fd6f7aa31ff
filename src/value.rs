//! Interpolated values.
//!
//! A template interleaves literal fragments with [`Value`]s. Every value has a
//! single textual rendering, computed by [`Value::render`]:
//!
//! | case | rendering |
//! |---|---|
//! | `Text(s)` | `s` |
//! | `Number(n)` | canonical decimal form, see [`Number`] |
//! | `Bool(b)` | `true` / `false` |
//! | `Null` | empty string |
//! | `Undefined` | empty string |
//!
//! `Null` and `Undefined` render identically but stay distinct cases so
//! callers can tell an explicit "no value" from a value that was never
//! supplied.
//!
//! # Examples
//!
//! ```rust
//! use heredoc::Value;
//!
//! assert_eq!(Value::from(42).render(), "42");
//! assert_eq!(Value::from(true).render(), "true");
//! assert_eq!(Value::from(None::<&str>).render(), "");
//! assert_eq!(Value::Undefined.render(), "");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value interpolated between two literal fragments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Text(String),
    Number(Number),
    Bool(bool),
    /// Explicit absence. Renders as the empty string.
    Null,
    /// Missing value. Renders as the empty string.
    #[default]
    Undefined,
}

impl Value {
    /// Textual form of the value as it is spliced into the template.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Value::Text(text) => Cow::Borrowed(text.as_str()),
            Value::Number(number) => Cow::Owned(number.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Null | Value::Undefined => Cow::Borrowed(""),
        }
    }

    /// True for the two cases that render as nothing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A numeric value.
///
/// Integers print in plain decimal. Floats print the way a template literal
/// stringifies them: integral floats drop the decimal point (`1.0` → `1`),
/// negative zero prints as `0`, NaN as `NaN` and infinities as `Infinity` /
/// `-Infinity`. Other finite floats use the shortest round-trip decimal form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{n}"),
            Number::UInt(n) => write!(f, "{n}"),
            Number::Float(n) if n.is_nan() => f.write_str("NaN"),
            Number::Float(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 == 0.0, so this also folds negative zero.
            Number::Float(n) if n == 0.0 => f.write_str("0"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Int(value as i64))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::UInt(value as u64))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}
