// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component types and their definitions.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::element::Element;
use crate::host::{Host, Renderer};
use crate::id::{Property, PropertyId};
use crate::schema::Schema;
use crate::store::PropertyStore;
use crate::value::{PropertyValue, Value};

/// What a component that does not override [`Component::render`] paints.
pub const PLACEHOLDER_TEMPLATE: &str = "Render Function not defined";

/// The template type a component produces.
pub type Template<C> = <<C as Component>::Renderer as Renderer>::Template;

/// The render root type a component paints into.
pub type Root<C> = <<C as Component>::Renderer as Renderer>::Root;

/// A property observer: called with each new value of the property,
/// before the render that change causes.
pub type Observer<C> = fn(&mut Element<C>, &Value);

/// A component type: its properties, observers, and template.
///
/// ```rust
/// use understory_element::{Component, Props, PropertyDescriptor, Renderer, Schema};
///
/// struct Text;
///
/// impl Renderer for Text {
///     type Template = String;
///     type Root = Vec<String>;
///
///     fn render(&mut self, template: String, root: &mut Vec<String>) {
///         root.push(template);
///     }
/// }
///
/// struct Greeting;
///
/// impl Component for Greeting {
///     type Renderer = Text;
///
///     fn schema() -> Schema {
///         let mut schema = Schema::new();
///         schema.register::<String>("name", PropertyDescriptor::string().value("world"));
///         schema
///     }
///
///     fn render(&self, props: &Props<'_>) -> String {
///         let name = props.value("name").and_then(|v| v.as_str()).unwrap_or_default();
///         format!("Hello, {name}!")
///     }
/// }
/// ```
pub trait Component: Sized {
    /// The renderer this component's templates are painted with.
    type Renderer: Renderer;

    /// Declares the component's properties.
    ///
    /// Called once per [`Definition`].
    fn schema() -> Schema;

    /// Resolves an observer named in a
    /// [`PropertyDescriptor`](crate::PropertyDescriptor).
    ///
    /// Returning `None` for a declared name is reported as
    /// [`Warning::MissingObserver`](crate::Warning::MissingObserver).
    fn observer(_name: &str) -> Option<Observer<Self>> {
        None
    }

    /// Produces the template for the current property values.
    fn render(&self, _props: &Props<'_>) -> Template<Self> {
        PLACEHOLDER_TEMPLATE.into()
    }

    /// Runs once, right after the first render of
    /// [`Element::attach`].
    fn after_first_render(_element: &mut Element<Self>) {}
}

/// A registered component type.
///
/// Holds the schema built by [`Component::schema`], shared by every element
/// constructed from it.
pub struct Definition<C> {
    schema: Rc<Schema>,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Component> Definition<C> {
    /// Builds the component's schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: Rc::new(C::schema()),
            _marker: PhantomData,
        }
    }

    /// The shared schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn shared_schema(&self) -> Rc<Schema> {
        Rc::clone(&self.schema)
    }

    /// Attribute names whose changes the host must forward to
    /// [`Element::attribute_changed`].
    #[must_use]
    pub fn observed_attributes(&self) -> Vec<String> {
        self.schema.observed_attributes()
    }

    /// Constructs an element. See [`Element::new`].
    pub fn construct(
        &self,
        component: C,
        host: impl Host + 'static,
        renderer: C::Renderer,
        root: Root<C>,
    ) -> Element<C> {
        Element::new(self, component, host, renderer, root)
    }
}

impl<C: Component> Default for Definition<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Definition<C> {
    fn clone(&self) -> Self {
        Self {
            schema: Rc::clone(&self.schema),
            _marker: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Definition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("component", &core::any::type_name::<C>())
            .field("schema", &self.schema)
            .finish()
    }
}

/// Read-only view of an element's properties, handed to
/// [`Component::render`].
#[derive(Clone, Copy)]
pub struct Props<'a> {
    schema: &'a Schema,
    store: &'a PropertyStore,
}

impl<'a> Props<'a> {
    pub(crate) fn new(schema: &'a Schema, store: &'a PropertyStore) -> Self {
        Self { schema, store }
    }

    /// Reads a property as `T`.
    ///
    /// `None` if the property was never written or holds another kind of
    /// value.
    #[must_use]
    pub fn get<T: PropertyValue>(&self, property: Property<T>) -> Option<T> {
        self.store.get(property.id()).and_then(T::from_value)
    }

    /// The value of a declared property.
    #[must_use]
    pub fn value_of(&self, id: PropertyId) -> Option<&'a Value> {
        self.store.get(id)
    }

    /// The value stored under a name, declared or not.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&'a Value> {
        match self.schema.by_name(name) {
            Some(id) => self.store.get(id),
            None => self.store.overflow(name),
        }
    }
}

impl fmt::Debug for Props<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for id in self.store.property_ids() {
            map.entry(&self.schema.name(id), &self.store.get(id));
        }
        map.finish()
    }
}
