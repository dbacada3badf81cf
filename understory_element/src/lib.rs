// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Element: reflected-attribute reactive element properties.
//!
//! This crate gives a UI component declared, typed properties that stay in
//! sync with the attributes of its host element, run observers when they
//! change, and re-render the component. Templates and painting are left to a
//! [`Renderer`]; attribute storage is left to a [`Host`].
//!
//! ## Core Concepts
//!
//! - [`Schema`]: the ordered property declarations of a component type, each
//!   with an optional [`PropertyDescriptor`] (type, reflection, observer,
//!   default).
//! - [`PropertyType`]: the closed set of coercion rules that turn attribute
//!   text into a [`Value`].
//! - [`Element`]: one component instance. It owns the property values, the
//!   property ⇄ attribute name tables ([`AttributeNames`]) and the observer
//!   registry, and funnels every change through a single notification path.
//! - [`Diagnostics`]: where recoverable configuration problems are reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_element::{
//!     Component, Definition, Host, MemoryHost, Props, PropertyDescriptor, Renderer, Schema,
//! };
//!
//! struct Log;
//!
//! impl Renderer for Log {
//!     type Template = String;
//!     type Root = Vec<String>;
//!
//!     fn render(&mut self, template: String, root: &mut Vec<String>) {
//!         root.push(template);
//!     }
//! }
//!
//! struct Counter;
//!
//! impl Component for Counter {
//!     type Renderer = Log;
//!
//!     fn schema() -> Schema {
//!         let mut schema = Schema::new();
//!         schema.register::<f64>("count", PropertyDescriptor::number().value(0));
//!         schema.register::<bool>(
//!             "active",
//!             PropertyDescriptor::boolean().reflect_to_attribute(true),
//!         );
//!         schema
//!     }
//!
//!     fn render(&self, props: &Props<'_>) -> String {
//!         format!("count={:?}", props.value("count").and_then(|v| v.as_number()))
//!     }
//! }
//!
//! let definition = Definition::<Counter>::new();
//! assert_eq!(definition.observed_attributes(), vec!["active"]);
//!
//! let host = MemoryHost::new().with_attribute("count", "5");
//! let mut el = definition.construct(Counter, host, Log, Vec::new());
//! el.attach();
//!
//! // The markup attribute wins over the default, and attaching renders once.
//! assert_eq!(el.root(), &["count=Some(5.0)"]);
//!
//! let active = el.schema().property::<bool>("active").unwrap();
//! el.set(active, true).unwrap();
//! assert!(el.host().has_attribute("active"));
//! el.set(active, false).unwrap();
//! assert!(!el.host().has_attribute("active"));
//! assert_eq!(el.get(active), Some(false));
//! ```
//!
//! ## Coercion
//!
//! | Type | Attribute absent | Attribute text |
//! |------|------------------|----------------|
//! | Boolean | `false` | `false` for `"false"`/`"null"`, else `true` |
//! | String | `""` | `""` for `""`/`"null"`, else the text |
//! | Number | `0` | parsed number, `NaN` if not numeric |
//! | Object | empty object | the text |
//! | Array | `[Null]` | one-element array of the text |
//! | Custom | the function's result | the function's result |
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coerce;
mod component;
mod descriptor;
mod diagnostics;
mod element;
mod host;
mod id;
mod names;
mod schema;
mod store;
mod value;

pub use coerce::{CoerceFn, Coerced, CoercionError, PropertyType, parse_number};
pub use component::{Component, Definition, Observer, PLACEHOLDER_TEMPLATE, Props, Root, Template};
pub use descriptor::{DefaultFactory, DefaultValue, PropertyDescriptor};
pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics, Warning};
pub use element::Element;
pub use host::{Host, MemoryHost, Renderer, ScopedLookup};
pub use id::{Property, PropertyId};
pub use names::{AttributeNames, attribute_name};
pub use schema::{Schema, SchemaEntry};
pub use store::PropertyStore;
pub use value::{PropertyValue, Value};
