//! Path-based reads over a [`Value`] tree.
//!
//! [`get`] is total: every well-typed input resolves to a value or to
//! absence, never to an error. Absence (`None`) covers missing keys,
//! out-of-range indices, descent through primitives, holes in sparse arrays,
//! and the defensive root markers (absent, null, NaN) that
//! partially-initialized external state can hand in.
//!
//! # Key design decisions
//!
//! - **Explicit presence checks**: object lookup asks "does this key exist",
//!   never "is the stored value truthy". A stored `0`, `""`, or `false` at an
//!   intermediate node is descended through like any other value.
//! - **Primitives are terminal**: any segment remaining when traversal meets
//!   a scalar (or null) resolves to absence. There is no one-segment special
//!   case.

use crate::path::{array_index, Path};
use crate::value::Value;

/// Read the value at `path` inside `root`.
///
/// Returns `None` ("absence") when no value exists at that location. A
/// zero-length path returns `root` itself. Never mutates, never panics.
///
/// An absent, null, or NaN `root` resolves to `None` before any traversal,
/// even on the root path, so garbage roots from half-built external state
/// read as missing rather than erroring.
///
/// # Examples
///
/// ```
/// use dotpath_core::{get, Value};
///
/// let root = Value::from_json_str(r#"{"a":{"b":[10,20,30]}}"#).unwrap();
/// assert_eq!(get(&root, "a.b.1"), Some(&Value::Integer(20)));
/// assert_eq!(get(&root, "a.b.9"), None);
/// assert_eq!(get(&root, "a.b.1.c"), None);
/// ```
pub fn get<'a>(root: &'a Value, path: impl Into<Path>) -> Option<&'a Value> {
    match root {
        Value::Absent | Value::Null => return None,
        Value::Float(f) if f.is_nan() => return None,
        _ => {}
    }

    let path = path.into();
    let mut current = root;
    for segment in path.segments() {
        current = match current {
            Value::Object(entries) => entries
                .iter()
                .find(|(key, _)| key == segment)
                .map(|(_, child)| child)?,
            Value::Array(items) => items.get(array_index(segment)?)?,
            // Scalars and null cannot be descended into.
            _ => return None,
        };
        // A hole in a sparse array reads as missing.
        if current.is_absent() {
            return None;
        }
    }
    Some(current)
}
