// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal configuration and coercion warnings.
//!
//! An [`Element`](crate::Element) reports problems it can work around through
//! a [`Diagnostics`] sink supplied at construction. [`TracingDiagnostics`]
//! forwards them as `tracing` events; [`RecordingDiagnostics`] keeps them for
//! inspection.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// A condition the engine recovered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A reflected property has a type with no attribute text form. Writes
    /// to it are stored without touching the attribute.
    RichReflection {
        /// The property.
        property: &'static str,
        /// The declared type name.
        ty: &'static str,
    },
    /// A declared observer does not exist on the component. The property
    /// works without it.
    MissingObserver {
        /// The property.
        property: &'static str,
        /// The observer name that did not resolve.
        observer: &'static str,
    },
    /// Attribute text was rejected by the property's coercion. The property
    /// kept its previous value.
    CoercionRejected {
        /// The property.
        property: &'static str,
        /// The attribute text.
        raw: Option<String>,
        /// The reason given by the coercion.
        reason: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RichReflection { property, ty } => write!(
                f,
                "property `{property}` of type {ty} is reflected, but rich data cannot be set as an attribute"
            ),
            Self::MissingObserver { property, observer } => write!(
                f,
                "observer `{observer}` of property `{property}` is not defined"
            ),
            Self::CoercionRejected {
                property,
                raw,
                reason,
            } => write!(
                f,
                "attribute value {raw:?} rejected for property `{property}`: {reason}"
            ),
        }
    }
}

/// Sink for [`Warning`]s.
pub trait Diagnostics {
    /// Reports a warning.
    fn warn(&self, warning: &Warning);
}

/// Emits each warning as a `tracing` event at `WARN` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, warning: &Warning) {
        match warning {
            Warning::RichReflection { property, ty } => {
                tracing::warn!(property, ty, "{warning}");
            }
            Warning::MissingObserver { property, observer } => {
                tracing::warn!(property, observer, "{warning}");
            }
            Warning::CoercionRejected { property, .. } => {
                tracing::warn!(property, "{warning}");
            }
        }
    }
}

/// Keeps every warning in memory.
///
/// Clones share the same log, so a test can hand one clone to an element and
/// read the warnings back through another.
///
/// ```rust
/// use understory_element::{Diagnostics, RecordingDiagnostics, Warning};
///
/// let log = RecordingDiagnostics::new();
/// let sink = log.clone();
/// sink.warn(&Warning::MissingObserver { property: "count", observer: "count_changed" });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Rc<RefCell<Vec<Warning>>>,
}

impl RecordingDiagnostics {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }

    /// Number of warnings recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }

    /// Forgets all recorded warnings.
    pub fn clear(&self) {
        self.warnings.borrow_mut().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}
