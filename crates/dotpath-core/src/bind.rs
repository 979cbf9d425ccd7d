//! Bindings: a named location inside caller-owned state.
//!
//! A [`Binding`] couples an optional path to nothing else. The state tree it
//! reads and writes is handed in on every call, so one binding can serve any
//! number of trees and carries no hidden global state. An unbound binding
//! (no path) addresses the whole state.

use crate::path::Path;
use crate::reader;
use crate::value::Value;
use crate::writer;

/// A reusable handle on one location inside a state tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binding {
    name: Option<Path>,
}

impl Binding {
    /// A binding addressing the location `name` inside whatever state is
    /// supplied later.
    pub fn bound(name: impl Into<Path>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A binding addressing the whole state.
    pub fn unbound() -> Self {
        Self { name: None }
    }

    /// The bound path, if any.
    pub fn name(&self) -> Option<&Path> {
        self.name.as_ref()
    }

    /// Read the bound location out of `state`, or the whole state when
    /// unbound.
    pub fn read<'a>(&self, state: &'a Value) -> Option<&'a Value> {
        match &self.name {
            Some(name) => reader::get(state, name),
            None => Some(state),
        }
    }

    /// Write `value` at the bound location inside `state`, or replace the
    /// whole state when unbound.
    pub fn write(&self, state: &mut Value, value: impl Into<Value>) {
        match &self.name {
            Some(name) => writer::set(state, name, value),
            None => *state = value.into(),
        }
    }
}
