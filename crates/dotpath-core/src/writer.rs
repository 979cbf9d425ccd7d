//! Path-based writes with auto-vivification.
//!
//! [`set`] walks the tree in place, materializing missing intermediate
//! containers as it goes. The family of a materialized container (array vs
//! object) is a forward-looking decision: it depends on the shape of the
//! *next* segment, never on what the slot held before.
//!
//! # Key design decisions
//!
//! - **Destructive auto-vivification**: an intermediate slot holding a
//!   scalar, a null, or a container of the wrong family is replaced by a
//!   fresh empty container of the required family; its old content is
//!   discarded. A container of the correct family is reused as-is.
//! - **Silent abandonment**: writes that cannot be placed at all (a scalar
//!   root, a non-numeric segment meeting an array, a zero-length path) are
//!   dropped without error. Each abandoned write emits a `tracing` warning.
//! - **Sparse extension**: writing past the end of an array grows it, leaving
//!   the skipped positions [`Value::Absent`].

use tracing::warn;

use crate::path::{array_index, Path};
use crate::value::Value;

/// Write `value` at `path` inside `root`, mutating `root` in place.
///
/// Missing intermediate containers are materialized: an empty array when the
/// following segment is numeric, an empty object otherwise. Writing through
/// an existing scalar does not error; the scalar is overwritten by the
/// container the path requires.
///
/// At the terminal segment, arrays are written at the parsed index and
/// objects at the string key. Index-shaped segments address object keys
/// literally: `"1"` is a legal object key when the container is an object.
///
/// # Examples
///
/// ```
/// use dotpath_core::{get, set, Value};
///
/// let mut state = Value::Object(Vec::new());
/// set(&mut state, "users.0.name", "shaun");
/// set(&mut state, "users.1.name", "john");
///
/// assert_eq!(get(&state, "users.1.name"), Some(&Value::String("john".into())));
/// ```
pub fn set(root: &mut Value, path: impl Into<Path>, value: impl Into<Value>) {
    let path = path.into();
    let Some((terminal, intermediate)) = path.segments().split_last() else {
        warn!("set: zero-length path has no slot to write into; write abandoned");
        return;
    };

    let mut current = root;
    for (position, segment) in intermediate.iter().enumerate() {
        // Forward-looking family choice: the slot must hold an array when
        // the next segment is numeric, an object otherwise.
        let want_array = array_index(&path.segments()[position + 1]).is_some();
        current = match descend(current, segment, want_array) {
            Some(child) => child,
            None => {
                warn!("set: no slot for segment '{segment}' here; write abandoned");
                return;
            }
        };
    }

    write_terminal(current, terminal, value.into());
}

/// Resolve one intermediate segment to a mutable child slot, materializing or
/// replacing the slot so it holds a container of the required family.
///
/// Returns `None` when `current` offers no slot for this segment: it is a
/// scalar, null, or absent, or it is an array and the segment is not an
/// index.
fn descend<'a>(current: &'a mut Value, segment: &str, want_array: bool) -> Option<&'a mut Value> {
    match current {
        Value::Object(entries) => {
            let position = match entries.iter().position(|(key, _)| key == segment) {
                Some(position) => position,
                None => {
                    entries.push((segment.to_string(), empty_container(want_array)));
                    entries.len() - 1
                }
            };
            let slot = &mut entries[position].1;
            if !family_matches(slot, want_array) {
                *slot = empty_container(want_array);
            }
            Some(slot)
        }
        Value::Array(items) => {
            let index = array_index(segment)?;
            if index >= items.len() {
                items.resize(index + 1, Value::Absent);
            }
            let slot = &mut items[index];
            if !family_matches(slot, want_array) {
                *slot = empty_container(want_array);
            }
            Some(slot)
        }
        _ => None,
    }
}

/// Place the value at the last segment of the path.
fn write_terminal(container: &mut Value, segment: &str, value: Value) {
    match container {
        Value::Object(entries) => {
            match entries.iter_mut().find(|(key, _)| key == segment) {
                Some((_, slot)) => *slot = value,
                None => entries.push((segment.to_string(), value)),
            }
        }
        Value::Array(items) => {
            let Some(index) = array_index(segment) else {
                warn!("set: segment '{segment}' is not an array index; write abandoned");
                return;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Absent);
            }
            items[index] = value;
        }
        _ => {
            warn!("set: cannot write through a scalar; write abandoned");
        }
    }
}

fn empty_container(want_array: bool) -> Value {
    if want_array {
        Value::Array(Vec::new())
    } else {
        Value::Object(Vec::new())
    }
}

fn family_matches(value: &Value, want_array: bool) -> bool {
    match value {
        Value::Array(_) => want_array,
        Value::Object(_) => !want_array,
        _ => false,
    }
}
