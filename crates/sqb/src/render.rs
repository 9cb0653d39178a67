//! The render protocol shared by every expression node.
//!
//! A node writes its text into a [`Sink`] and appends the arguments for the
//! placeholders it wrote, in the order it wrote them. Nodes keep no counters of
//! their own: everything that changes during a render lives in the sink.

use crate::error::RenderResult;
use crate::value::Value;

/// Destination for rendered SQL text and arguments.
pub trait Sink {
    /// Append literal SQL text.
    fn push_str(&mut self, s: &str);

    /// Append one argument placeholder (`?` or `$n`, depending on the sink).
    fn push_placeholder(&mut self);

    /// Append one argument value.
    fn push_arg(&mut self, value: Value);

    /// Append argument values in order.
    fn push_args(&mut self, values: Vec<Value>) {
        for value in values {
            self.push_arg(value);
        }
    }

    /// Number of placeholders written so far.
    fn placeholder_count(&self) -> usize;

    /// Number of arguments appended so far.
    fn arg_count(&self) -> usize;
}

/// An expression that can be rendered into a [`Sink`].
///
/// Implement this for custom nodes and wrap them with
/// [`Expr::custom`](crate::Expr::custom).
///
/// # Example
/// ```
/// use sqb::{Render, RenderResult, Sink, Value};
///
/// #[derive(Debug)]
/// struct IsActive;
///
/// impl Render for IsActive {
///     fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
///         sink.push_str("status = ");
///         sink.push_placeholder();
///         sink.push_arg(Value::from("active"));
///         Ok(())
///     }
/// }
/// ```
pub trait Render: std::fmt::Debug {
    /// Write this expression and its arguments into `sink`.
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()>;
}

impl<T: Render + ?Sized> Render for std::sync::Arc<T> {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        (**self).render(sink)
    }
}

/// Write `n` comma-separated placeholders.
pub(crate) fn push_placeholders(sink: &mut dyn Sink, n: usize) {
    for i in 0..n {
        if i > 0 {
            sink.push_str(", ");
        }
        sink.push_placeholder();
    }
}
