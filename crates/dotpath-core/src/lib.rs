//! # dotpath-core
//!
//! Dot-path `get` and `set` over nested, heterogeneous value trees.
//!
//! A path like `"a.b.1.c"` addresses a location inside a tree of objects,
//! arrays, and scalars: a segment that parses as a non-negative integer is an
//! array index, anything else is an object key. Reads resolve to the value at
//! that location or to absence, never to an error. Writes materialize missing
//! intermediate containers as they go, choosing array or object by looking at
//! the shape of the *next* path segment, and extend arrays sparsely when an
//! index points past the end.
//!
//! ## Quick start
//!
//! ```rust
//! use dotpath_core::{get, set, Value};
//!
//! let mut state = Value::Object(Vec::new());
//!
//! // Writes auto-vivify: "0" after "users" asks for an array.
//! set(&mut state, "users.0.name", "shaun");
//! set(&mut state, "users.1.name", "john");
//!
//! assert_eq!(get(&state, "users.1.name"), Some(&Value::String("john".into())));
//! assert_eq!(get(&state, "users.9.name"), None);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree everything operates on
//! - [`path`] — path parsing and segment classification
//! - [`reader`] — `get`: total, non-mutating path reads
//! - [`writer`] — `set`: in-place, auto-vivifying path writes
//! - [`bind`] — `Binding`, an optional path over caller-owned state
//! - [`json`] — JSON interchange for `Value` trees
//! - [`error`] — error types for JSON interchange

pub mod bind;
pub mod error;
pub mod json;
pub mod path;
pub mod reader;
pub mod value;
pub mod writer;

pub use bind::Binding;
pub use error::{DotpathError, Result};
pub use path::{array_index, Path};
pub use reader::get;
pub use value::Value;
pub use writer::set;
