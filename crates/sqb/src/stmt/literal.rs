//! Nodes interpolated as raw text. They never produce arguments.

use crate::error::{RenderError, RenderResult};
use crate::render::{Render, Sink};

/// Raw text substituted as is, e.g. a table name: `SELECT * FROM ?` → `SELECT * FROM users`.
///
/// The text is not parameterized or escaped. Never build one from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(pub String);

/// An integer substituted as text: `LIMIT ?` → `LIMIT 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric(pub i64);

/// `LIMIT <n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(pub i64);

/// `OFFSET <n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(pub i64);

impl Render for Literal {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        if self.0.is_empty() {
            return Err(RenderError::EmptyLiteral { node: "string" });
        }
        sink.push_str(&self.0);
        Ok(())
    }
}

impl Render for Numeric {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        sink.push_str(&self.0.to_string());
        Ok(())
    }
}

impl Render for Limit {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        sink.push_str("LIMIT ");
        Numeric(self.0).render(sink)
    }
}

impl Render for Offset {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        sink.push_str("OFFSET ");
        Numeric(self.0).render(sink)
    }
}
