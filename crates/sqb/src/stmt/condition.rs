use crate::error::{RenderError, RenderResult};
use crate::render::{Render, Sink, push_placeholders};
use crate::value::{Value, flatten_refs};
use std::borrow::Cow;

/// The right-hand side of a [`Condition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// `<op> ?`, for `=`, `!=`, `>`, `>=`, `<`, `<=`, `IS`, `IS NOT`, ...
    Op {
        op: Cow<'static, str>,
        value: Value,
    },
    /// `LIKE ?` / `NOT LIKE ?`
    Like { negated: bool, value: Value },
    /// `BETWEEN ? AND ?` / `NOT BETWEEN ? AND ?`
    Between {
        negated: bool,
        left: Option<Value>,
        right: Option<Value>,
    },
    /// `IN (?, ?, ...)` / `NOT IN (?, ?, ...)`
    ///
    /// Values are flattened before rendering, so nested lists produce one
    /// placeholder per leaf value.
    In { negated: bool, values: Vec<Value> },
}

impl Comparison {
    /// Create an operator comparison.
    pub fn op(op: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Comparison::Op {
            op: op.into(),
            value: value.into(),
        }
    }

    /// Create a LIKE comparison.
    pub fn like(value: impl Into<Value>) -> Self {
        Comparison::Like {
            negated: false,
            value: value.into(),
        }
    }

    /// Create a NOT LIKE comparison.
    pub fn not_like(value: impl Into<Value>) -> Self {
        Comparison::Like {
            negated: true,
            value: value.into(),
        }
    }

    /// Create a BETWEEN comparison.
    pub fn between(left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Comparison::Between {
            negated: false,
            left: Some(left.into()),
            right: Some(right.into()),
        }
    }

    /// Create a NOT BETWEEN comparison.
    pub fn not_between(left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Comparison::Between {
            negated: true,
            left: Some(left.into()),
            right: Some(right.into()),
        }
    }

    /// Create an IN comparison.
    pub fn in_list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Comparison::In {
            negated: false,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a NOT IN comparison.
    pub fn not_in<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Comparison::In {
            negated: true,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Write the comparison (everything after the column name).
    pub fn render_comparison(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        match self {
            Comparison::Op { op, value } => {
                sink.push_str(op);
                sink.push_str(" ");
                sink.push_placeholder();
                sink.push_arg(value.clone());
            }
            Comparison::Like { negated, value } => {
                if *negated {
                    sink.push_str("NOT ");
                }
                sink.push_str("LIKE ");
                sink.push_placeholder();
                sink.push_arg(value.clone());
            }
            Comparison::Between {
                negated,
                left,
                right,
            } => {
                let node = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                let left = left
                    .as_ref()
                    .ok_or(RenderError::MissingBound { node, side: "left" })?;
                let right = right
                    .as_ref()
                    .ok_or(RenderError::MissingBound { node, side: "right" })?;
                sink.push_str(node);
                sink.push_str(" ");
                sink.push_placeholder();
                sink.push_str(" AND ");
                sink.push_placeholder();
                sink.push_args(vec![left.clone(), right.clone()]);
            }
            Comparison::In { negated, values } => {
                let node = if *negated { "NOT IN" } else { "IN" };
                let values = flatten_refs(values);
                if values.is_empty() {
                    return Err(RenderError::EmptyList { node });
                }
                sink.push_str(node);
                sink.push_str(" (");
                push_placeholders(sink, values.len());
                sink.push_str(")");
                sink.push_args(values);
            }
        }
        Ok(())
    }
}

/// `<column> <comparison>`, e.g. `category = ?` or `brand NOT IN (?, ?)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub compare: Option<Comparison>,
}

impl Condition {
    /// Create a condition on `column`.
    pub fn new(column: impl Into<String>, compare: Comparison) -> Self {
        Self {
            column: column.into(),
            compare: Some(compare),
        }
    }
}

impl Render for Condition {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        if self.column.is_empty() {
            return Err(RenderError::MissingColumn { node: "condition" });
        }
        let compare = self
            .compare
            .as_ref()
            .ok_or(RenderError::MissingCompare { node: "condition" })?;
        sink.push_str(&self.column);
        sink.push_str(" ");
        compare.render_comparison(sink)
    }
}
