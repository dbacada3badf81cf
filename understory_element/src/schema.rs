// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-component-type property schema.
//!
//! This module provides [`Schema`], the ordered set of properties a component
//! type declares, fixed when the type is defined.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::descriptor::PropertyDescriptor;
use crate::id::{Property, PropertyId};
use crate::names::attribute_name;

/// One declared property.
pub struct SchemaEntry {
    name: &'static str,
    descriptor: Option<PropertyDescriptor>,
}

impl SchemaEntry {
    /// The property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The descriptor, absent for properties declared as plain state.
    #[must_use]
    #[inline]
    pub fn descriptor(&self) -> Option<&PropertyDescriptor> {
        self.descriptor.as_ref()
    }
}

impl core::fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchemaEntry")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

/// The declared properties of a component type.
///
/// Properties keep their declaration order; it is the order an
/// [`Element`](crate::Element) generates their accessors in.
///
/// ```rust
/// use understory_element::{PropertyDescriptor, Schema};
///
/// let mut schema = Schema::new();
/// let open = schema.register::<bool>(
///     "isOpen",
///     PropertyDescriptor::boolean().reflect_to_attribute(true),
/// );
/// schema.register::<f64>("count", PropertyDescriptor::number().value(0));
///
/// assert_eq!(schema.by_name("isOpen"), Some(open.id()));
/// assert_eq!(schema.observed_attributes(), vec!["is-open"]);
/// ```
#[derive(Default)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
    by_name: HashMap<&'static str, PropertyId>,
    by_attribute: HashMap<String, PropertyId>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property with a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the name is already declared, if its attribute name is
    /// already taken by another property, or if more than 65,535 properties
    /// are declared.
    pub fn register<T>(
        &mut self,
        name: &'static str,
        descriptor: PropertyDescriptor,
    ) -> Property<T> {
        Property::from_id(self.insert(name, Some(descriptor)))
    }

    /// Declares a property without a descriptor.
    ///
    /// Such a property is plain state: writes are stored as given and still
    /// trigger a render, but it is never coerced, reflected or observed.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Schema::register`].
    pub fn declare(&mut self, name: &'static str) -> PropertyId {
        self.insert(name, None)
    }

    fn insert(
        &mut self,
        name: &'static str,
        descriptor: Option<PropertyDescriptor>,
    ) -> PropertyId {
        assert!(
            !self.by_name.contains_key(name),
            "Property '{name}' is already declared"
        );
        let attr = attribute_name(name);
        if let Some(other) = self.by_attribute.get(&attr) {
            panic!(
                "Property '{name}' maps to attribute '{attr}', already used by '{}'",
                self.entries[other.slot()].name
            );
        }
        assert!(
            self.entries.len() < u16::MAX as usize,
            "Too many properties declared (max {})",
            u16::MAX
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = PropertyId::new(self.entries.len() as u16);

        self.entries.push(SchemaEntry { name, descriptor });
        self.by_name.insert(name, id);
        self.by_attribute.insert(attr, id);
        id
    }

    /// Returns the number of declared properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a property by name as a typed handle.
    #[must_use]
    pub fn property<T>(&self, name: &str) -> Option<Property<T>> {
        self.by_name(name).map(Property::from_id)
    }

    /// Returns the name of a property.
    #[must_use]
    pub fn name(&self, id: PropertyId) -> Option<&'static str> {
        self.entries.get(id.slot()).map(|e| e.name)
    }

    /// Returns the entry of a property.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&SchemaEntry> {
        self.entries.get(id.slot())
    }

    /// Returns the descriptor of a property, if it has one.
    #[must_use]
    pub fn descriptor(&self, id: PropertyId) -> Option<&PropertyDescriptor> {
        self.entries.get(id.slot()).and_then(SchemaEntry::descriptor)
    }

    /// Iterates declared properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &SchemaEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len < u16::MAX")]
            (PropertyId::new(i as u16), e)
        })
    }

    /// Attribute names the host must forward changes of.
    ///
    /// These are the attributes of every property declared with
    /// `reflect_to_attribute`, in declaration order, computed on each call.
    #[must_use]
    pub fn observed_attributes(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.descriptor().is_some_and(PropertyDescriptor::reflects))
            .map(|e| attribute_name(e.name))
            .collect()
    }
}

impl core::fmt::Debug for Schema {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Schema")
            .field("count", &self.entries.len())
            .field(
                "properties",
                &self.entries.iter().map(|e| e.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, vec};

    #[test]
    fn schema_new() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
        assert!(schema.observed_attributes().is_empty());
    }

    #[test]
    fn ids_follow_declaration_order() {
        let mut schema = Schema::new();
        let a = schema.register::<f64>("a", PropertyDescriptor::number());
        let b = schema.declare("b");
        let c = schema.register::<bool>("c", PropertyDescriptor::boolean());

        assert_eq!(a.id().index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(c.id().index(), 2);

        let names: Vec<_> = schema.iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn lookups() {
        let mut schema = Schema::new();
        let count = schema.register::<f64>("count", PropertyDescriptor::number());
        let plain = schema.declare("plain");

        assert_eq!(schema.by_name("count"), Some(count.id()));
        assert_eq!(schema.property::<f64>("count"), Some(count));
        assert_eq!(schema.by_name("missing"), None);
        assert_eq!(schema.name(plain), Some("plain"));
        assert_eq!(schema.name(PropertyId::new(99)), None);
        assert!(schema.descriptor(count.id()).is_some());
        assert!(schema.descriptor(plain).is_none());
    }

    #[test]
    fn observed_attributes_lists_reflected_properties_only() {
        let mut schema = Schema::new();
        schema.register::<bool>(
            "isOpen",
            PropertyDescriptor::boolean().reflect_to_attribute(true),
        );
        schema.register::<f64>("count", PropertyDescriptor::number());
        schema.register::<String>(
            "headerText",
            PropertyDescriptor::string().reflect_to_attribute(true),
        );
        schema.declare("plain");

        assert_eq!(schema.observed_attributes(), vec!["is-open", "header-text"]);
    }

    #[test]
    #[should_panic(expected = "already declared")]
    fn duplicate_name() {
        let mut schema = Schema::new();
        schema.declare("count");
        schema.declare("count");
    }

    #[test]
    #[should_panic(expected = "already used by 'is-open'")]
    fn colliding_attribute_names() {
        let mut schema = Schema::new();
        schema.declare("is-open");
        schema.declare("isOpen");
    }

    #[test]
    fn schema_debug() {
        let mut schema = Schema::new();
        schema.declare("count");
        let debug = format!("{schema:?}");
        assert!(debug.contains("Schema"));
        assert!(debug.contains("count"));
    }
}
