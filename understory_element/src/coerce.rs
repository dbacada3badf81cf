// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute text to property value coercion.
//!
//! Attributes only ever carry text (or are absent). [`PropertyType::coerce`]
//! turns that text into the typed [`Value`] a property stores. The rule for
//! each type is a pure function of the attribute text; the one side effect a
//! rule can ask for, clearing a false-sentinel attribute, is returned to the
//! caller in [`Coerced::clear_attribute`]. An [`Element`](crate::Element)
//! settles a non-sentinel Boolean by whether its host has the attribute.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use core::fmt;

use crate::value::Value;

/// A custom coercion function.
///
/// Receives the attribute text (`None` when the attribute is absent) and
/// returns the property value, or a reason the text was rejected.
pub type CoerceFn = Box<dyn Fn(Option<&str>) -> Result<Value, String>>;

/// The declared type of a property, which selects its coercion rule.
pub enum PropertyType {
    /// Presence-based boolean.
    Boolean,
    /// Plain text; empty and `"null"` mean "no value".
    String,
    /// Numeric text.
    Number,
    /// Record value. Not representable as attribute text.
    Object,
    /// List value. Not representable as attribute text.
    Array,
    /// Author-supplied coercion.
    Custom(CoerceFn),
}

/// Result of coercing attribute text.
#[derive(Clone, Debug, PartialEq)]
pub struct Coerced {
    /// The property value.
    pub value: Value,
    /// Whether the attribute must be removed so that the element reflects
    /// the value (set for the false and null sentinels).
    pub clear_attribute: bool,
}

impl Coerced {
    fn keep(value: Value) -> Self {
        Self {
            value,
            clear_attribute: false,
        }
    }

    fn clear(value: Value) -> Self {
        Self {
            value,
            clear_attribute: true,
        }
    }
}

impl PropertyType {
    /// Creates a [`PropertyType::Custom`] from a closure.
    #[must_use]
    pub fn custom<F>(coerce: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<Value, String> + 'static,
    {
        Self::Custom(Box::new(coerce))
    }

    /// The type name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Number => "Number",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Custom(_) => "Custom",
        }
    }

    /// Returns `true` for types whose values have no attribute text form.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// Coerces attribute text into a property value.
    ///
    /// ```rust
    /// use understory_element::{PropertyType, Value};
    ///
    /// let flag = PropertyType::Boolean.coerce(Some("false")).unwrap();
    /// assert_eq!(flag.value, Value::Bool(false));
    /// assert!(flag.clear_attribute);
    ///
    /// let flag = PropertyType::Boolean.coerce(Some("")).unwrap();
    /// assert_eq!(flag.value, Value::Bool(true));
    ///
    /// let count = PropertyType::Number.coerce(Some(" 5 ")).unwrap();
    /// assert_eq!(count.value, Value::Number(5.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Only [`PropertyType::Custom`] can fail; the error is the reason its
    /// function gave.
    pub fn coerce(&self, raw: Option<&str>) -> Result<Coerced, String> {
        Ok(match self {
            Self::Boolean => match raw {
                None | Some("false" | "null") => Coerced::clear(Value::Bool(false)),
                Some(_) => Coerced::keep(Value::Bool(true)),
            },
            Self::String => match raw {
                None | Some("" | "null") => Coerced::clear(Value::String(String::new())),
                Some(text) => Coerced::keep(Value::String(text.into())),
            },
            Self::Number => Coerced::keep(Value::Number(raw.map_or(0.0, parse_number))),
            Self::Object => Coerced::keep(raw.map_or_else(
                || Value::Object(BTreeMap::new()),
                |text| Value::String(text.into()),
            )),
            Self::Array => Coerced::keep(Value::Array(
                vec![raw.map_or(Value::Null, |text| Value::String(text.into()))],
            )),
            Self::Custom(coerce) => Coerced::keep(coerce(raw)?),
        })
    }
}

impl fmt::Debug for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses numeric attribute text.
///
/// Surrounding whitespace is ignored and blank text is zero. Decimal,
/// exponent, `Infinity`, and unsigned `0x`/`0o`/`0b` prefixed integers are
/// accepted; anything else is `NaN`.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    // `f64::from_str` also takes "inf" and "nan" spellings, which are not
    // numeric attribute text.
    if unsigned
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Unsigned digits in `radix`, accumulated as `f64` so that literals wider
/// than 64 bits still parse.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, ch| {
            ch.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Attribute text that a property's coercion rejected.
///
/// The property keeps the value it had before the attribute changed.
#[derive(Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// The property the attribute maps to.
    pub property: &'static str,
    /// The attribute name.
    pub attribute: String,
    /// The rejected attribute text.
    pub raw: Option<String>,
    /// The reason the coercion function gave.
    pub reason: String,
}

impl fmt::Debug for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoercionError {{ property: {:?}, attribute: {:?}, raw: {:?}, reason: {:?} }}",
            self.property, self.attribute, self.raw, self.reason
        )
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute `{}` = {:?} cannot be coerced for property `{}`: {}",
            self.attribute, self.raw, self.property, self.reason
        )
    }
}

impl core::error::Error for CoercionError {}
