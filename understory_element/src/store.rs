// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element property value storage.
//!
//! An element holds values only for the declared properties that have been
//! written, by a default, a markup attribute, or a setter. They are kept
//! inline, sorted by [`PropertyId`]; a property with no entry reads as
//! [`Value::Null`] in templates and compares as `Null` when an attribute
//! change is reconciled.
//!
//! Names that were never declared go to a separate overflow map. Overflow
//! values are inert: the engine never coerces, reflects or observes them.

use alloc::string::String;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::id::PropertyId;
use crate::value::Value;

/// Most components declare fewer than 8 properties.
const INLINE_CAPACITY: usize = 8;

/// Current values of one element's properties.
///
/// ```rust
/// use understory_element::{PropertyId, PropertyStore, Value};
///
/// let mut store = PropertyStore::new();
/// let count = PropertyId::new(0);
///
/// assert!(store.get(count).is_none());
/// store.set(count, Value::Number(1.0));
/// assert_eq!(store.get(count), Some(&Value::Number(1.0)));
///
/// store.set_overflow("scratch", Value::from("kept"));
/// assert_eq!(store.overflow("scratch"), Some(&Value::from("kept")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyStore {
    /// Declared property values, sorted by [`PropertyId`].
    entries: SmallVec<[(PropertyId, Value); INLINE_CAPACITY]>,
    /// Values of undeclared names.
    overflow: HashMap<String, Value>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.overflow.is_empty()
    }

    /// Number of declared properties with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ids of declared properties with a value, in ascending order.
    pub fn property_ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    #[inline]
    fn find(&self, id: PropertyId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(pid, _)| *pid)
    }

    /// The value of a declared property, if written.
    #[must_use]
    #[inline]
    pub fn get(&self, id: PropertyId) -> Option<&Value> {
        self.find(id).ok().map(|idx| &self.entries[idx].1)
    }

    /// The value of a declared property, reading an unwritten one as
    /// [`Value::Null`].
    #[must_use]
    pub fn get_or_null(&self, id: PropertyId) -> &Value {
        const NULL: &Value = &Value::Null;
        self.get(id).unwrap_or(NULL)
    }

    /// Returns `true` if the property has been written.
    #[must_use]
    #[inline]
    pub fn contains(&self, id: PropertyId) -> bool {
        self.find(id).is_ok()
    }

    /// Writes a declared property, returning the previous value.
    pub fn set(&mut self, id: PropertyId, value: Value) -> Option<Value> {
        match self.find(id) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (id, value));
                None
            }
        }
    }

    /// The value of an undeclared name.
    #[must_use]
    pub fn overflow(&self, name: &str) -> Option<&Value> {
        self.overflow.get(name)
    }

    /// Writes an undeclared name, returning the previous value.
    pub fn set_overflow(&mut self, name: &str, value: Value) -> Option<Value> {
        self.overflow.insert(name.into(), value)
    }
}
