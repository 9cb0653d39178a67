//! Constructor functions for expression nodes.
//!
//! ```
//! use sqb::{and, eq, not_in, or};
//!
//! let expr = and(or(eq("c", 1), eq("c", 2)), not_in("brand", ["apple", "sony"]));
//! ```

use crate::stmt::{
    Columns, Comparison, Condition, Expr, Limit, Literal, Numeric, Offset, OrderBy, Paren,
    fold_and, fold_or,
};
use crate::value::Value;
use std::borrow::Cow;

/// `column <op> ?` for any operator, e.g. `IS` or `IS NOT`.
pub fn op<O, C, V>(op: O, column: C, value: V) -> Condition
where
    O: Into<Cow<'static, str>>,
    C: Into<String>,
    V: Into<Value>,
{
    Condition::new(column, Comparison::op(op, value))
}

/// `column = ?`
pub fn eq<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op("=", column, value)
}

/// `column != ?`
pub fn ne<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op("!=", column, value)
}

/// `column > ?`
pub fn gt<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op(">", column, value)
}

/// `column >= ?`
pub fn ge<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op(">=", column, value)
}

/// `column < ?`
pub fn lt<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op("<", column, value)
}

/// `column <= ?`
pub fn le<C: Into<String>, V: Into<Value>>(column: C, value: V) -> Condition {
    op("<=", column, value)
}

/// `column LIKE ?`
pub fn like<C: Into<String>, V: Into<Value>>(column: C, pattern: V) -> Condition {
    Condition::new(column, Comparison::like(pattern))
}

/// `column NOT LIKE ?`
pub fn not_like<C: Into<String>, V: Into<Value>>(column: C, pattern: V) -> Condition {
    Condition::new(column, Comparison::not_like(pattern))
}

/// `column BETWEEN ? AND ?`
pub fn between<C, L, R>(column: C, left: L, right: R) -> Condition
where
    C: Into<String>,
    L: Into<Value>,
    R: Into<Value>,
{
    Condition::new(column, Comparison::between(left, right))
}

/// `column NOT BETWEEN ? AND ?`
pub fn not_between<C, L, R>(column: C, left: L, right: R) -> Condition
where
    C: Into<String>,
    L: Into<Value>,
    R: Into<Value>,
{
    Condition::new(column, Comparison::not_between(left, right))
}

/// `column IN (?, ?, ...)`, one placeholder per flattened value.
pub fn in_list<C, I>(column: C, values: I) -> Condition
where
    C: Into<String>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Condition::new(column, Comparison::in_list(values))
}

/// `column NOT IN (?, ?, ...)`, one placeholder per flattened value.
pub fn not_in<C, I>(column: C, values: I) -> Condition
where
    C: Into<String>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Condition::new(column, Comparison::not_in(values))
}

/// `left AND right`
pub fn and(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    left.into().and(right)
}

/// `(left OR right)`
pub fn or(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    left.into().or(right)
}

/// `(expr)`
pub fn paren(expr: impl Into<Expr>) -> Expr {
    Expr::Paren(Paren::new(expr))
}

/// AND together one condition per map entry.
///
/// Keys are sorted first so the output does not depend on the map's iteration
/// order. One entry gives a bare condition; no entries give `None`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// let filters = HashMap::from([("b", 2), ("a", 1)]);
/// let expr = sqb::and_from_map(sqb::eq, filters).unwrap();
/// let q = sqb::new("SELECT * FROM t WHERE ?").bind(expr).build().unwrap();
/// assert_eq!(q.sql, "SELECT * FROM t WHERE a = ? AND b = ?");
/// ```
pub fn and_from_map<F, I, K, V>(f: F, entries: I) -> Option<Expr>
where
    F: Fn(String, Value) -> Condition,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    fold_and(sorted_conditions(f, entries))
}

/// OR together one condition per map entry, with keys sorted first.
///
/// One entry gives a bare condition; no entries give `None`.
pub fn or_from_map<F, I, K, V>(f: F, entries: I) -> Option<Expr>
where
    F: Fn(String, Value) -> Condition,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    fold_or(sorted_conditions(f, entries))
}

fn sorted_conditions<F, I, K, V>(f: F, entries: I) -> Vec<Condition>
where
    F: Fn(String, Value) -> Condition,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut entries: Vec<(String, Value)> = entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(k, v)| f(k, v)).collect()
}

/// `col1, col2, ...`
pub fn columns<I>(columns: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Expr::Columns(Columns::new(columns))
}

/// Raw table name substituted without a parameter.
pub fn table(name: impl Into<String>) -> Expr {
    Expr::Literal(Literal(name.into()))
}

/// Raw text substituted without a parameter.
pub fn string(text: impl Into<String>) -> Expr {
    Expr::Literal(Literal(text.into()))
}

/// An integer substituted as text.
pub fn numeric(n: i64) -> Expr {
    Expr::Numeric(Numeric(n))
}

/// `LIMIT n`
pub fn limit(n: i64) -> Expr {
    Expr::Limit(Limit(n))
}

/// `OFFSET n`
pub fn offset(n: i64) -> Expr {
    Expr::Offset(Offset(n))
}

/// A single ORDER BY term: `column` or `column DESC`.
pub fn order_by(column: impl Into<String>, desc: bool) -> OrderBy {
    OrderBy::new(column, desc)
}

/// Chain ORDER BY terms: `a, b DESC, c`.
pub fn order_by_list(first: OrderBy, rest: impl IntoIterator<Item = OrderBy>) -> OrderBy {
    rest.into_iter().fold(first, OrderBy::then)
}
