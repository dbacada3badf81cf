// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reactive element.
//!
//! [`Element`] couples a [`Component`] with its host attributes, its property
//! values, and its renderer. Every property write and every forwarded
//! attribute change goes through one notification path: the property's
//! observer runs, then the component is rendered unless rendering is
//! suspended.
//!
//! ## Lifecycle
//!
//! 1. **Construct** ([`Element::new`]): builds the property ⇄ attribute
//!    tables. Nothing is rendered.
//! 2. **Attach** ([`Element::attach`]): with rendering suspended, generates
//!    each property's accessor in declaration order (observer lookup,
//!    default, markup attribute), then renders exactly once and calls
//!    [`Component::after_first_render`].
//! 3. **Live**: [`Element::set`] and [`Element::attribute_changed`] each
//!    render immediately, unless wrapped in [`Element::batch`].
//!
//! ## Reflection
//!
//! A property declared with `reflect_to_attribute` and a text-representable
//! type stores its value in the attribute. Writing it sets (or, for
//! [`Value::Null`], removes) the attribute and then reads the property back
//! through the attribute coercion, so `el.set(active, false)` leaves no
//! `active` attribute and reads back `false`.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::coerce::{Coerced, CoercionError, PropertyType};
use crate::component::{Component, Definition, Observer, Props, Root};
use crate::descriptor::PropertyDescriptor;
use crate::diagnostics::{Diagnostics, TracingDiagnostics, Warning};
use crate::host::{Host, Renderer, ScopedLookup};
use crate::id::{Property, PropertyId};
use crate::names::AttributeNames;
use crate::schema::{Schema, SchemaEntry};
use crate::store::PropertyStore;
use crate::value::{PropertyValue, Value};

/// A component instance bound to its host element and render root.
pub struct Element<C: Component> {
    schema: Rc<Schema>,
    names: AttributeNames,
    store: PropertyStore,
    observers: Vec<Option<Observer<C>>>,
    component: C,
    host: Box<dyn Host>,
    renderer: C::Renderer,
    root: Root<C>,
    diagnostics: Box<dyn Diagnostics>,
    suspended: bool,
    render_pending: bool,
    attached: bool,
    initialized: bool,
}

impl<C: Component> Element<C> {
    /// Constructs an element.
    ///
    /// Warnings go to [`TracingDiagnostics`] until
    /// [`with_diagnostics`](Self::with_diagnostics) replaces it.
    pub fn new(
        definition: &Definition<C>,
        component: C,
        host: impl Host + 'static,
        renderer: C::Renderer,
        root: Root<C>,
    ) -> Self {
        let schema = definition.shared_schema();
        let names = AttributeNames::new(&schema);
        let observers = vec![None; schema.len()];
        Self {
            schema,
            names,
            store: PropertyStore::new(),
            observers,
            component,
            host: Box::new(host),
            renderer,
            root,
            diagnostics: Box::new(TracingDiagnostics),
            suspended: false,
            render_pending: false,
            attached: false,
            initialized: false,
        }
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Handles the host element being attached to the tree.
    ///
    /// The first call generates the accessors of every declared property and
    /// renders once at the end, however many properties changed on the way.
    /// Later calls only render.
    ///
    /// Coercion failures during attachment are reported to the diagnostics
    /// sink; the affected property keeps its previous value.
    pub fn attach(&mut self) {
        self.attached = true;
        if self.initialized {
            tracing::debug!("element re-attached");
            self.paint();
            return;
        }

        tracing::debug!(properties = self.schema.len(), "attaching element");
        let was_suspended = core::mem::replace(&mut self.suspended, true);
        let schema = Rc::clone(&self.schema);
        for (id, entry) in schema.iter() {
            self.generate_accessor(id, entry);
        }
        self.suspended = was_suspended;
        self.initialized = true;
        self.render_pending = false;

        self.paint();
        C::after_first_render(self);
    }

    /// Handles a change to an observed attribute made by someone other than
    /// this element.
    ///
    /// The new text is coerced by the property's type. If the result equals
    /// the current value nothing further happens; otherwise it is stored and
    /// notified. A Boolean property reads `true` only while the host has the
    /// attribute, whatever `new` says. Attributes that do not belong to a
    /// reflected property are ignored. The previous text is accepted for
    /// parity with the platform callback and not consulted.
    ///
    /// # Errors
    ///
    /// Returns the [`CoercionError`] of a rejecting custom coercion. The
    /// property keeps its previous value; the attribute is left as the host
    /// has it.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), CoercionError> {
        let Some(id) = self.names.property(name) else {
            return Ok(());
        };
        let schema = Rc::clone(&self.schema);
        match schema.descriptor(id) {
            Some(desc) if desc.reflects() => {
                self.reconcile(id, desc, name, new.map(String::from))
            }
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Property access
    // =========================================================================

    /// Reads a property as `T`.
    #[must_use]
    pub fn get<T: PropertyValue>(&self, property: Property<T>) -> Option<T> {
        self.props().get(property)
    }

    /// The value stored under a name, declared or not.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.schema.by_name(name) {
            Some(id) => self.store.get(id),
            None => self.store.overflow(name),
        }
    }

    /// Writes a property.
    ///
    /// # Errors
    ///
    /// A reflected property with a custom type returns the
    /// [`CoercionError`] of its coercion; the attribute and the property
    /// are left as they were.
    pub fn set<T: PropertyValue>(
        &mut self,
        property: Property<T>,
        value: T,
    ) -> Result<(), CoercionError> {
        self.assign(property.id(), value.into_value())
    }

    /// Writes a property by name.
    ///
    /// Undeclared names are stored as inert state: no coercion, reflection,
    /// observer or render.
    ///
    /// # Errors
    ///
    /// As for [`set`](Self::set).
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<(), CoercionError> {
        match self.schema.by_name(name) {
            Some(id) => self.assign(id, value.into()),
            None => {
                self.store.set_overflow(name, value.into());
                Ok(())
            }
        }
    }

    /// Runs `f` with rendering suspended and renders once afterwards if any
    /// property changed.
    ///
    /// Observers still run for each change as it happens. Nested batches
    /// render when the outermost one ends.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.suspended {
            return f(self);
        }
        self.suspended = true;
        self.render_pending = false;
        let out = f(self);
        self.suspended = false;
        if core::mem::take(&mut self.render_pending) && self.attached {
            self.paint();
        }
        out
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// A read-only view of the property values.
    #[must_use]
    pub fn props(&self) -> Props<'_> {
        Props::new(&self.schema, &self.store)
    }

    /// The component's schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The property ⇄ attribute tables.
    #[must_use]
    pub fn attribute_names(&self) -> &AttributeNames {
        &self.names
    }

    /// Attribute names whose changes the host must forward.
    #[must_use]
    pub fn observed_attributes(&self) -> Vec<String> {
        self.schema.observed_attributes()
    }

    /// The component.
    #[must_use]
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The component, mutably.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// The host element.
    #[must_use]
    pub fn host(&self) -> &dyn Host {
        &*self.host
    }

    /// The host element, mutably.
    ///
    /// Changes made here are not seen by the element until they are passed
    /// to [`attribute_changed`](Self::attribute_changed).
    pub fn host_mut(&mut self) -> &mut dyn Host {
        &mut *self.host
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &C::Renderer {
        &self.renderer
    }

    /// The render root.
    #[must_use]
    pub fn root(&self) -> &Root<C> {
        &self.root
    }

    /// Returns `true` once [`attach`](Self::attach) has been called.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // =========================================================================
    // Engine
    // =========================================================================

    fn generate_accessor(&mut self, id: PropertyId, entry: &SchemaEntry) {
        let attr = self.attribute_of(id);
        let markup = self.host.get_attribute(&attr);

        let Some(desc) = entry.descriptor() else {
            if let Some(raw) = markup {
                self.store.set(id, Value::String(raw.clone()));
                self.notify(id, Value::String(raw));
            }
            return;
        };

        if desc.reflects() && desc.ty().is_rich() {
            self.diagnostics.warn(&Warning::RichReflection {
                property: entry.name(),
                ty: desc.ty().name(),
            });
        }
        if let Some(observer) = desc.observer_name() {
            match C::observer(observer) {
                Some(f) => self.observers[id.slot()] = Some(f),
                None => self.diagnostics.warn(&Warning::MissingObserver {
                    property: entry.name(),
                    observer,
                }),
            }
        }
        // A value written before attachment counts as already initialized.
        if let Some(default) = desc.default_value()
            && !self.store.contains(id)
        {
            let value = default.produce();
            if let Err(err) = self.assign(id, value) {
                tracing::debug!(%err, "default rejected");
            }
        }

        // Markup read before the default was applied wins over it.
        let outcome = if desc.reflects_text() {
            let raw = match markup {
                Some(raw) => {
                    self.host.set_attribute(&attr, &raw);
                    Some(raw)
                }
                None => self.host.get_attribute(&attr),
            };
            self.reconcile(id, desc, &attr, raw)
        } else if let Some(raw) = markup {
            self.coerce_attribute(id, desc, &attr, Some(raw), false)
                .map(|value| {
                    self.store.set(id, value.clone());
                    self.notify(id, value);
                })
        } else {
            Ok(())
        };
        if let Err(err) = outcome {
            tracing::debug!(%err, "markup attribute rejected");
        }
    }

    /// The setter: every write to a declared property ends here.
    fn assign(&mut self, id: PropertyId, value: Value) -> Result<(), CoercionError> {
        let schema = Rc::clone(&self.schema);
        match schema.descriptor(id) {
            Some(desc) if desc.reflects_text() => {
                let attr = self.attribute_of(id);
                let previous = self.host.get_attribute(&attr);
                match value.attribute_text() {
                    Some(text) => self.host.set_attribute(&attr, &text),
                    None => self.host.remove_attribute(&attr),
                }
                let current = self.host.get_attribute(&attr);
                match self.coerce_attribute(id, desc, &attr, current, true) {
                    Ok(coerced) => {
                        self.store.set(id, coerced.clone());
                        self.notify(id, coerced);
                        Ok(())
                    }
                    Err(err) => {
                        match previous {
                            Some(text) => self.host.set_attribute(&attr, &text),
                            None => self.host.remove_attribute(&attr),
                        }
                        Err(err)
                    }
                }
            }
            _ => {
                self.store.set(id, value.clone());
                self.notify(id, value);
                Ok(())
            }
        }
    }

    /// Brings a reflected property in line with its attribute text.
    fn reconcile(
        &mut self,
        id: PropertyId,
        desc: &PropertyDescriptor,
        attr: &str,
        raw: Option<String>,
    ) -> Result<(), CoercionError> {
        let value = self.coerce_attribute(id, desc, attr, raw, true)?;
        if *self.store.get_or_null(id) == value {
            tracing::trace!(attribute = attr, "attribute unchanged after coercion");
            return Ok(());
        }
        self.store.set(id, value.clone());
        self.notify(id, value);
        Ok(())
    }

    /// Coerces attribute text, clearing false-sentinel attributes when
    /// `normalize` is set.
    fn coerce_attribute(
        &mut self,
        id: PropertyId,
        desc: &PropertyDescriptor,
        attr: &str,
        raw: Option<String>,
        normalize: bool,
    ) -> Result<Value, CoercionError> {
        match desc.ty().coerce(raw.as_deref()) {
            Ok(Coerced {
                value,
                clear_attribute,
            }) => {
                if clear_attribute {
                    if normalize && self.host.has_attribute(attr) {
                        self.host.remove_attribute(attr);
                    }
                    return Ok(value);
                }
                // A switch is on only while the host carries its attribute.
                if matches!(desc.ty(), PropertyType::Boolean) {
                    return Ok(Value::Bool(self.host.has_attribute(attr)));
                }
                Ok(value)
            }
            Err(reason) => {
                let property = self.schema.name(id).unwrap_or_default();
                self.diagnostics.warn(&Warning::CoercionRejected {
                    property,
                    raw: raw.clone(),
                    reason: reason.clone(),
                });
                Err(CoercionError {
                    property,
                    attribute: attr.into(),
                    raw,
                    reason,
                })
            }
        }
    }

    /// The change-notification path.
    fn notify(&mut self, id: PropertyId, value: Value) {
        if let Some(observer) = self.observers.get(id.slot()).copied().flatten() {
            observer(self, &value);
        }
        if self.suspended || !self.attached {
            self.render_pending = true;
            return;
        }
        self.paint();
    }

    fn paint(&mut self) {
        let template = self
            .component
            .render(&Props::new(&self.schema, &self.store));
        tracing::trace!("rendering element");
        self.renderer.render(template, &mut self.root);
    }

    fn attribute_of(&self, id: PropertyId) -> String {
        self.names.attribute(id).map(String::from).unwrap_or_default()
    }
}

impl<C: Component> Element<C>
where
    Root<C>: ScopedLookup,
{
    /// Identified nodes of the render root, by id.
    ///
    /// Rebuilt from the root on every call.
    #[must_use]
    pub fn by_id(&self) -> HashMap<String, <Root<C> as ScopedLookup>::Node> {
        self.root.identified().into_iter().collect()
    }
}

impl<C: Component> fmt::Debug for Element<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("component", &core::any::type_name::<C>())
            .field("props", &self.props())
            .field("attached", &self.attached)
            .field("suspended", &self.suspended)
            .finish_non_exhaustive()
    }
}
