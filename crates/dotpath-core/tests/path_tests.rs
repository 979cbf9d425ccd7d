/// Path parsing, flattening, and segment classification.
use dotpath_core::{array_index, Path};

// ============================================================================
// 1. Parsing
// ============================================================================

#[test]
fn parse_splits_on_dots() {
    let p = Path::parse("a.b.1.c");
    assert_eq!(p.segments(), ["a", "b", "1", "c"]);
    assert_eq!(p.len(), 4);
}

#[test]
fn empty_string_is_the_root_path() {
    let p = Path::parse("");
    assert!(p.is_empty());
    assert_eq!(p, Path::root());
}

#[test]
fn empty_segments_are_preserved_as_empty_keys() {
    assert_eq!(Path::parse(".a").segments(), ["", "a"]);
    assert_eq!(Path::parse("a.").segments(), ["a", ""]);
    assert_eq!(Path::parse("a..b").segments(), ["a", "", "b"]);
    assert_eq!(Path::parse(".").segments(), ["", ""]);
}

// ============================================================================
// 2. Sequences
// ============================================================================

#[test]
fn from_segments_resplits_and_flattens() {
    let p = Path::from_segments(["user", "pets.0", "name"]);
    assert_eq!(p.segments(), ["user", "pets", "0", "name"]);
    assert_eq!(p, Path::parse("user.pets.0.name"));
}

#[test]
fn from_segments_preserves_empty_elements() {
    let p = Path::from_segments([""]);
    assert_eq!(p.segments(), [""]);
}

#[test]
fn conversions_cover_common_shapes() {
    assert_eq!(Path::from("a.b"), Path::parse("a.b"));
    assert_eq!(Path::from(String::from("a.b")), Path::parse("a.b"));
    assert_eq!(Path::from(vec!["a", "b"]), Path::parse("a.b"));
    assert_eq!(
        Path::from(vec![String::from("a"), String::from("b")]),
        Path::parse("a.b")
    );
    assert_eq!(Path::from(["a", "b"]), Path::parse("a.b"));
    let slice: &[&str] = &["a", "b"];
    assert_eq!(Path::from(slice), Path::parse("a.b"));
}

// ============================================================================
// 3. Display
// ============================================================================

#[test]
fn display_joins_with_dots() {
    assert_eq!(Path::parse("a.b.1").to_string(), "a.b.1");
    assert_eq!(Path::root().to_string(), "");
    assert_eq!(Path::parse(".a.").to_string(), ".a.");
}

// ============================================================================
// 4. Classification
// ============================================================================

#[test]
fn digit_runs_are_indices() {
    assert_eq!(array_index("0"), Some(0));
    assert_eq!(array_index("42"), Some(42));
    // Leading zeros still parse as base-10.
    assert_eq!(array_index("007"), Some(7));
}

#[test]
fn anything_else_is_a_key() {
    assert_eq!(array_index(""), None);
    assert_eq!(array_index("-1"), None);
    assert_eq!(array_index("+1"), None);
    assert_eq!(array_index(" 1"), None);
    assert_eq!(array_index("1 "), None);
    assert_eq!(array_index("1a"), None);
    assert_eq!(array_index("a1"), None);
    assert_eq!(array_index("1.5"), None);
}

#[test]
fn oversized_digit_runs_are_keys() {
    assert_eq!(array_index("99999999999999999999999999"), None);
}
