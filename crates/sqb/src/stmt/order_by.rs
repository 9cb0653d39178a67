use crate::error::{RenderError, RenderResult};
use crate::render::{Render, Sink};

/// One ORDER BY term, optionally chained to the next: `a, b DESC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub desc: bool,
    pub next: Option<Box<OrderBy>>,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, desc: bool) -> Self {
        Self {
            column: column.into(),
            desc,
            next: None,
        }
    }

    /// Append `next` at the end of the chain.
    pub fn then(mut self, next: OrderBy) -> Self {
        let tail = match self.next.take() {
            Some(rest) => rest.then(next),
            None => next,
        };
        self.next = Some(Box::new(tail));
        self
    }

    /// Iterate over the terms of the chain, starting with this one.
    pub fn iter(&self) -> impl Iterator<Item = &OrderBy> {
        std::iter::successors(Some(self), |o| o.next.as_deref())
    }
}

impl Render for OrderBy {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        for (i, term) in self.iter().enumerate() {
            if term.column.is_empty() {
                return Err(RenderError::MissingColumn { node: "ORDER BY" });
            }
            if i > 0 {
                sink.push_str(", ");
            }
            sink.push_str(&term.column);
            if term.desc {
                sink.push_str(" DESC");
            }
        }
        Ok(())
    }
}
