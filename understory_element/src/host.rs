// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to the platform an element lives in.
//!
//! - [`Host`]: the element's attribute storage.
//! - [`Renderer`]: paints a template into a render root.
//! - [`ScopedLookup`]: finds identified nodes inside a render root.
//!
//! [`MemoryHost`] is a plain attribute map for headless use.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Attribute access on the host element.
///
/// Calls made by the engine must not be fed back into
/// [`Element::attribute_changed`](crate::Element::attribute_changed); the
/// engine reconciles its own writes. Only changes made by someone else are
/// forwarded.
pub trait Host {
    /// The attribute's text, or `None` if absent.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Sets the attribute's text.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Removes the attribute.
    fn remove_attribute(&mut self, name: &str);

    /// Returns `true` if the attribute is present.
    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }
}

/// Paints templates into a render root.
///
/// The engine hands over whatever the component's
/// [`render`](crate::Component::render) returned and never looks inside.
pub trait Renderer {
    /// The template description.
    ///
    /// Must be constructible from text so a component that does not override
    /// `render` still has something to paint.
    type Template: From<&'static str>;

    /// The isolated output target.
    type Root;

    /// Reconciles `root` with `template`.
    fn render(&mut self, template: Self::Template, root: &mut Self::Root);
}

/// Identified descendants of a render root.
pub trait ScopedLookup {
    /// Handle to a rendered node.
    type Node: Clone;

    /// Every descendant carrying an id, with that id.
    fn identified(&self) -> Vec<(String, Self::Node)>;
}

/// An in-memory attribute map.
///
/// ```rust
/// use understory_element::{Host, MemoryHost};
///
/// let mut host = MemoryHost::new().with_attribute("count", "5");
/// assert_eq!(host.get_attribute("count").as_deref(), Some("5"));
///
/// host.remove_attribute("count");
/// assert!(!host.has_attribute("count"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHost {
    attributes: BTreeMap<String, String>,
}

impl MemoryHost {
    /// Creates a host with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, as if it were present in markup.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// All attributes, sorted by name.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Host for MemoryHost {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.into(), value.into());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}
