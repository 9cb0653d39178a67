use super::Value;
use std::{mem, slice, vec};

/// Flatten nested list arguments into one ordered sequence.
///
/// Lists are expanded in place, at any depth. Every other value is kept as is,
/// so byte strings and JSON arrays stay atomic.
///
/// # Example
/// ```
/// use sqb::{flatten, Value};
///
/// let flat = flatten([Value::from(1), Value::from(vec![2, 3]), Value::from("x")]);
/// assert_eq!(flat, vec![Value::from(1), Value::from(2), Value::from(3), Value::from("x")]);
/// ```
pub fn flatten<I>(values: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let values = values.into_iter();
    let mut out = Vec::with_capacity(values.size_hint().0);
    for value in values {
        flatten_into(&mut out, value.into());
    }
    out
}

/// Append `value` to `out`, splicing list elements in order.
///
/// Uses an explicit stack so arbitrarily deep nesting cannot overflow.
pub(crate) fn flatten_into(out: &mut Vec<Value>, mut value: Value) {
    if !value.is_list() {
        out.push(value);
        return;
    }

    let mut stack: Vec<vec::IntoIter<Value>> = vec![take_items(&mut value)];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(mut v) if v.is_list() => stack.push(take_items(&mut v)),
            Some(v) => out.push(v),
            None => {
                stack.pop();
            }
        }
    }
}

/// Flatten borrowed values, cloning only the leaves.
///
/// Nested lists are walked by reference, so no list is ever cloned whole.
pub(crate) fn flatten_refs<'a, I>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut out = Vec::new();
    for value in values {
        let Value::List(items) = value else {
            out.push(value.clone());
            continue;
        };

        let mut stack: Vec<slice::Iter<'a, Value>> = vec![items.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Value::List(inner)) => stack.push(inner.iter()),
                Some(v) => out.push(v.clone()),
                None => {
                    stack.pop();
                }
            }
        }
    }
    out
}

fn take_items(value: &mut Value) -> vec::IntoIter<Value> {
    match value {
        Value::List(items) => mem::take(items).into_iter(),
        _ => Vec::new().into_iter(),
    }
}
