/// Binding behavior: bound and unbound reads and writes over caller state.
use dotpath_core::{Binding, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn bound_binding_reads_its_location() {
    let state = v(json!({"user": {"name": "alice"}}));
    let binding = Binding::bound("user.name");
    assert_eq!(binding.read(&state), Some(&Value::String("alice".into())));
}

#[test]
fn bound_binding_writes_its_location() {
    let mut state = v(json!({"user": {"name": "alice"}}));
    let binding = Binding::bound("user.name");
    binding.write(&mut state, "bob");
    assert_eq!(state, v(json!({"user": {"name": "bob"}})));
}

#[test]
fn bound_binding_vivifies_missing_state() {
    let mut state = Value::Object(Vec::new());
    Binding::bound("form.fields.0.value").write(&mut state, 42);
    assert_eq!(
        Binding::bound("form.fields.0.value").read(&state),
        Some(&Value::Integer(42))
    );
}

#[test]
fn binding_read_of_a_missing_location_is_absent() {
    let state = v(json!({"a": 1}));
    assert_eq!(Binding::bound("a.b.c").read(&state), None);
}

#[test]
fn unbound_binding_reads_the_whole_state() {
    let state = v(json!({"a": 1}));
    let binding = Binding::unbound();
    assert_eq!(binding.read(&state), Some(&state));
}

#[test]
fn unbound_binding_replaces_the_whole_state() {
    let mut state = v(json!({"a": 1}));
    Binding::unbound().write(&mut state, "fresh");
    assert_eq!(state, Value::String("fresh".into()));
}

#[test]
fn name_reports_the_bound_path() {
    assert_eq!(
        Binding::bound("a.b").name().map(|p| p.to_string()),
        Some("a.b".to_string())
    );
    assert_eq!(Binding::unbound().name(), None);
    assert_eq!(Binding::default(), Binding::unbound());
}
