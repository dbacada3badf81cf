// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property name to attribute name mapping.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::id::PropertyId;
use crate::schema::Schema;

/// Derives the attribute name of a property.
///
/// A hyphen is inserted before every ASCII uppercase letter that is not the
/// first character, and the result is lower-cased. Other uppercase letters
/// are lower-cased without a hyphen.
///
/// ```rust
/// use understory_element::attribute_name;
///
/// assert_eq!(attribute_name("isOpen"), "is-open");
/// assert_eq!(attribute_name("maxItemCount"), "max-item-count");
/// assert_eq!(attribute_name("label"), "label");
/// ```
#[must_use]
pub fn attribute_name(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for (i, ch) in property.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// The per-element property ⇄ attribute tables.
///
/// Built from a [`Schema`], whose registration already rejects colliding
/// attribute names, so the two tables are always mutual inverses.
#[derive(Clone, Debug, Default)]
pub struct AttributeNames {
    by_property: Vec<String>,
    by_attribute: HashMap<String, PropertyId>,
}

impl AttributeNames {
    /// Builds the tables for every property declared in `schema`.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        let mut names = Self::default();
        for (id, entry) in schema.iter() {
            let attr = attribute_name(entry.name());
            names.by_attribute.insert(attr.clone(), id);
            names.by_property.push(attr);
        }
        names
    }

    /// The attribute name of a declared property.
    #[must_use]
    pub fn attribute(&self, id: PropertyId) -> Option<&str> {
        self.by_property.get(id.slot()).map(String::as_str)
    }

    /// The property an attribute name maps to.
    #[must_use]
    pub fn property(&self, attribute: &str) -> Option<PropertyId> {
        self.by_attribute.get(attribute).copied()
    }

    /// Number of mapped properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_property.len()
    }

    /// Returns `true` if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_property.is_empty()
    }
}
