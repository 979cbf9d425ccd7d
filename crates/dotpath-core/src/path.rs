//! Path parsing and segment classification.
//!
//! A [`Path`] is an ordered sequence of string segments, parsed from a
//! dot-delimited spec like `"a.b.1.c"` or assembled from a sequence of
//! segment strings. Whether a segment addresses an array index or an object
//! key is not a property of the path: [`array_index`] re-derives it at
//! traversal time, because the same segment can be an index against an array
//! and a key against an object.

use std::fmt;

/// An ordered sequence of segments identifying a location inside a
/// [`Value`](crate::Value) tree.
///
/// The zero-length path denotes the root value itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The zero-length path: addresses the root value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot-delimited path string.
    ///
    /// The empty string is the root path. Empty segments produced by leading,
    /// trailing, or doubled dots are preserved as empty-string keys. There is
    /// no escape for a literal `.` inside a key.
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self::root();
        }
        Self {
            segments: spec.split('.').map(str::to_string).collect(),
        }
    }

    /// Assemble a path from a sequence of segment strings.
    ///
    /// Each element is re-split on `.` and flattened, so a structural prefix
    /// can be mixed with a literal dotted fragment: `["user", "pets.0"]`
    /// produces the same path as `"user.pets.0"`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flattened = Vec::new();
        for part in segments {
            flattened.extend(part.as_ref().split('.').map(str::to_string));
        }
        Self {
            segments: flattened,
        }
    }

    /// The atomic segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for Path {
    fn from(spec: &str) -> Self {
        Path::parse(spec)
    }
}

impl From<String> for Path {
    fn from(spec: String) -> Self {
        Path::parse(&spec)
    }
}

impl From<&String> for Path {
    fn from(spec: &String) -> Self {
        Path::parse(spec)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::from_segments(segments)
    }
}

impl From<&[String]> for Path {
    fn from(segments: &[String]) -> Self {
        Path::from_segments(segments)
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Path::from_segments(segments)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path::from_segments(segments)
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::from_segments(segments)
    }
}

/// Classify a path segment: `Some(index)` when the segment parses entirely as
/// a non-negative base-10 integer that fits `usize`, `None` when it can only
/// be an object key.
///
/// No sign, no whitespace, no partial prefixes: `"1a"` and `" 1"` are keys.
/// Digit runs too large for `usize` are also keys — they can never index a
/// real array.
pub fn array_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
