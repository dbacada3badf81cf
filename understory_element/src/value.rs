// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic property values.
//!
//! Every property is stored as a [`Value`]. The [`PropertyValue`] trait maps
//! it to and from the plain Rust types a component works with, and
//! [`Value::attribute_text`] gives the string an element attribute carries
//! when the property is reflected.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The value of a property.
///
/// Equality is structural; as with IEEE floats, `Number(NaN)` never equals
/// itself, so writing `NaN` over `NaN` always counts as a change.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value. Reflected as an absent attribute.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Self>),
    /// A string-keyed record.
    Object(BTreeMap<String, Self>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is a [`Value::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The text an attribute carries for this value.
    ///
    /// `Null` has no attribute representation and returns `None`; writing it
    /// to a reflected property removes the attribute.
    ///
    /// ```rust
    /// use understory_element::Value;
    ///
    /// assert_eq!(Value::Number(5.0).attribute_text().as_deref(), Some("5"));
    /// assert_eq!(Value::Bool(false).attribute_text().as_deref(), Some("false"));
    /// assert_eq!(Value::Null.attribute_text(), None);
    /// ```
    #[must_use]
    pub fn attribute_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.text()),
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_text(*n),
            Self::String(s) => s.clone(),
            Self::Array(items) => items
                .iter()
                .map(|item| match item {
                    Self::Null => String::new(),
                    other => other.text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => String::from("[object Object]"),
        }
    }
}

fn number_text(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // Covers -0.0 as well.
        String::from("0")
    } else {
        format!("{n}")
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Rust types a property can be read back as.
///
/// Reading is lenient in one direction only: a stored [`Value`] of another
/// variant reads back as `None` rather than being converted.
pub trait PropertyValue: Sized {
    /// Extracts `Self` from a stored value.
    fn from_value(value: &Value) -> Option<Self>;

    /// Converts `self` into a storable value.
    fn into_value(self) -> Value;
}

impl PropertyValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn into_value(self) -> Value {
        self
    }
}

impl PropertyValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl PropertyValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_number()
    }

    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl PropertyValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(Into::into)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl PropertyValue for Vec<Value> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(items.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Array(self)
    }
}

impl PropertyValue for BTreeMap<String, Value> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(fields.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Object(self)
    }
}
