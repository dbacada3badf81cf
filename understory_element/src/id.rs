// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identification types.
//!
//! [`PropertyId`] is the slot index of a declared property within its
//! [`Schema`](crate::Schema); [`Property<T>`] adds the value type the author
//! reads and writes through.

use core::fmt;
use core::marker::PhantomData;

/// Index of a declared property within a [`Schema`](crate::Schema).
///
/// Ids are handed out in declaration order, which is also the order in which
/// an [`Element`](crate::Element) generates accessors on attachment.
///
/// ```rust
/// use understory_element::PropertyId;
///
/// let id = PropertyId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Creates a property id from a slot index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the slot index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// A typed handle to a declared property.
///
/// The type parameter is the Rust type the value is read back as through
/// [`Element::get`](crate::Element::get); the stored representation is always
/// a [`Value`](crate::Value).
///
/// ```rust
/// use understory_element::{Property, PropertyDescriptor, Schema};
///
/// let mut schema = Schema::new();
/// let open: Property<bool> = schema.register("isOpen", PropertyDescriptor::boolean());
/// assert_eq!(open.id().index(), 0);
/// assert_eq!(schema.property::<bool>("isOpen"), Some(open));
/// ```
pub struct Property<T> {
    id: PropertyId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    /// Wraps an id in a typed handle.
    ///
    /// Usually obtained from [`Schema::register`](crate::Schema::register) or
    /// [`Schema::property`](crate::Schema::property). Being `const`, it also
    /// lets a component keep its handles in constants.
    #[must_use]
    #[inline]
    pub const fn from_id(id: PropertyId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying id.
    #[must_use]
    #[inline]
    pub const fn id(self) -> PropertyId {
        self.id
    }
}

// Handles are plain ids whatever `T` is.
impl<T> Copy for Property<T> {}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Property<{}>(#{})",
            core::any::type_name::<T>(),
            self.id.index()
        )
    }
}
