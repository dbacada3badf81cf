// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors.
//!
//! A [`PropertyDescriptor`] carries everything the engine needs to know about
//! one declared property: its [`PropertyType`], whether it is reflected to an
//! attribute, the observer to call on change, and its default.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::coerce::PropertyType;
use crate::value::Value;

/// Zero-argument default factory.
pub type DefaultFactory = Box<dyn Fn() -> Value>;

/// The default value of a property, applied once when the element attaches.
pub enum DefaultValue {
    /// Used as-is.
    Literal(Value),
    /// Invoked once per element, at attachment.
    Factory(DefaultFactory),
}

impl DefaultValue {
    /// Produces the default for one element.
    #[must_use]
    pub fn produce(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory"),
        }
    }
}

/// Configuration of a declared property.
///
/// ```rust
/// use understory_element::{PropertyDescriptor, Value};
///
/// let desc = PropertyDescriptor::boolean()
///     .reflect_to_attribute(true)
///     .observer("open_changed")
///     .value(false);
///
/// assert!(desc.reflects());
/// assert_eq!(desc.observer_name(), Some("open_changed"));
/// assert_eq!(desc.default_value().map(|d| d.produce()), Some(Value::Bool(false)));
/// ```
pub struct PropertyDescriptor {
    ty: PropertyType,
    reflect_to_attribute: bool,
    observer: Option<&'static str>,
    value: Option<DefaultValue>,
}

impl PropertyDescriptor {
    /// Creates a descriptor of the given type with no reflection, observer
    /// or default.
    #[must_use]
    pub fn new(ty: PropertyType) -> Self {
        Self {
            ty,
            reflect_to_attribute: false,
            observer: None,
            value: None,
        }
    }

    /// A [`PropertyType::Boolean`] descriptor.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(PropertyType::Boolean)
    }

    /// A [`PropertyType::String`] descriptor.
    #[must_use]
    pub fn string() -> Self {
        Self::new(PropertyType::String)
    }

    /// A [`PropertyType::Number`] descriptor.
    #[must_use]
    pub fn number() -> Self {
        Self::new(PropertyType::Number)
    }

    /// A [`PropertyType::Object`] descriptor.
    #[must_use]
    pub fn object() -> Self {
        Self::new(PropertyType::Object)
    }

    /// A [`PropertyType::Array`] descriptor.
    #[must_use]
    pub fn array() -> Self {
        Self::new(PropertyType::Array)
    }

    /// A [`PropertyType::Custom`] descriptor.
    #[must_use]
    pub fn custom<F>(coerce: F) -> Self
    where
        F: Fn(Option<&str>) -> Result<Value, String> + 'static,
    {
        Self::new(PropertyType::custom(coerce))
    }

    /// Mirrors the property to its attribute and observes the attribute for
    /// external changes.
    #[must_use]
    pub fn reflect_to_attribute(mut self, reflect: bool) -> Self {
        self.reflect_to_attribute = reflect;
        self
    }

    /// Names the component observer to call with each new value.
    ///
    /// The name is resolved through
    /// [`Component::observer`](crate::Component::observer) when the element
    /// attaches.
    #[must_use]
    pub fn observer(mut self, name: &'static str) -> Self {
        self.observer = Some(name);
        self
    }

    /// Sets a literal default.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(DefaultValue::Literal(value.into()));
        self
    }

    /// Sets a default factory, invoked once per element.
    #[must_use]
    pub fn value_with<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        self.value = Some(DefaultValue::Factory(Box::new(factory)));
        self
    }

    /// The declared type.
    #[must_use]
    #[inline]
    pub fn ty(&self) -> &PropertyType {
        &self.ty
    }

    /// Whether the property is reflected, rich types included.
    #[must_use]
    #[inline]
    pub fn reflects(&self) -> bool {
        self.reflect_to_attribute
    }

    /// Whether writes actually go through the attribute.
    ///
    /// Reflected rich types fall back to plain storage.
    #[must_use]
    #[inline]
    pub fn reflects_text(&self) -> bool {
        self.reflect_to_attribute && !self.ty.is_rich()
    }

    /// The declared observer name.
    #[must_use]
    #[inline]
    pub fn observer_name(&self) -> Option<&'static str> {
        self.observer
    }

    /// The declared default.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.value.as_ref()
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("ty", &self.ty)
            .field("reflect_to_attribute", &self.reflect_to_attribute)
            .field("observer", &self.observer)
            .field("value", &self.value)
            .finish()
    }
}
