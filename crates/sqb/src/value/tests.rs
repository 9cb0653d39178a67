use super::*;

#[test]
fn flattens_nested_lists_in_order() {
    let flat = flatten([
        Value::from(1),
        Value::from(vec![2, 3]),
        Value::from(vec![vec![4], vec![5, 6]]),
        Value::from("x"),
    ]);

    assert_eq!(
        flat,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
            Value::from(5),
            Value::from(6),
            Value::from("x"),
        ]
    );
}

#[test]
fn bytes_are_atomic() {
    let flat = flatten([Value::bytes("hi")]);
    assert_eq!(flat, vec![Value::Bytes(Bytes::from_static(b"hi"))]);
}

#[test]
fn json_arrays_are_atomic() {
    let doc = serde_json::json!([1, 2, 3]);
    let flat = flatten([Value::from(doc.clone())]);
    assert_eq!(flat, vec![Value::Json(doc)]);
}

#[test]
fn mixed_sequence_keeps_bytes_inside_lists() {
    let mixed = Value::List(vec![
        Value::from(1),
        Value::bytes("ab"),
        Value::List(vec![Value::from(2), Value::List(vec![Value::bytes("cd")])]),
    ]);

    let flat = flatten([mixed]);
    assert_eq!(
        flat,
        vec![
            Value::from(1),
            Value::bytes("ab"),
            Value::from(2),
            Value::bytes("cd"),
        ]
    );
}

#[test]
fn empty_lists_vanish() {
    let flat = flatten([Value::List(vec![]), Value::from(1), Value::List(vec![Value::List(vec![])])]);
    assert_eq!(flat, vec![Value::from(1)]);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let mut value = Value::from(42);
    for _ in 0..100_000 {
        value = Value::List(vec![value]);
    }

    let mut out = Vec::new();
    flatten::flatten_into(&mut out, value);
    assert_eq!(out, vec![Value::from(42)]);
}

fn nested(depth: usize, leaf: Value) -> Value {
    let mut value = leaf;
    for _ in 0..depth {
        value = Value::List(vec![value]);
    }
    value
}

#[test]
fn borrowed_flatten_walks_deep_nesting() {
    let values = vec![Value::from(1), nested(100_000, Value::from(2)), Value::from(vec![3])];
    assert_eq!(
        flatten::flatten_refs(&values),
        vec![Value::from(1), Value::from(2), Value::from(3)]
    );
    assert_eq!(values.len(), 3);
}

#[test]
fn deep_nesting_drops_without_overflow() {
    let wide = Value::List(vec![nested(50_000, Value::from(1)), nested(50_000, Value::from(2))]);
    drop(wide);
}

#[test]
fn option_maps_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::from("a"));
    assert!(Value::from(None::<String>).is_null());
}

#[test]
fn arrays_and_slices_become_lists() {
    let names = ["apple", "sony"];
    assert_eq!(Value::from(names), Value::list(["apple", "sony"]));
    assert_eq!(Value::from(&names[..]), Value::list(["apple", "sony"]));
    assert!(Value::from(vec![1i64]).is_list());
}
