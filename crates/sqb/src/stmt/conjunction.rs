use super::Expr;
use crate::error::{RenderError, RenderResult};
use crate::render::{Render, Sink};

/// `left AND right`, written without parentheses.
///
/// Grouping against a surrounding OR is up to the caller (see [`Paren`]).
#[derive(Debug, Clone, Default)]
pub struct And {
    pub left: Option<Box<Expr>>,
    pub right: Option<Box<Expr>>,
}

/// `(left OR right)`.
///
/// OR binds looser than AND on most databases, so it always parenthesizes
/// itself. A left-folded chain therefore nests: `((a OR b) OR c)`.
#[derive(Debug, Clone, Default)]
pub struct Or {
    pub left: Option<Box<Expr>>,
    pub right: Option<Box<Expr>>,
}

/// `(expr)`.
#[derive(Debug, Clone, Default)]
pub struct Paren {
    pub expr: Option<Box<Expr>>,
}

impl And {
    pub fn new(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            left: Some(Box::new(left.into())),
            right: Some(Box::new(right.into())),
        }
    }
}

impl Or {
    pub fn new(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            left: Some(Box::new(left.into())),
            right: Some(Box::new(right.into())),
        }
    }
}

impl Paren {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: Some(Box::new(expr.into())),
        }
    }
}

fn operands<'a>(
    node: &'static str,
    left: &'a Option<Box<Expr>>,
    right: &'a Option<Box<Expr>>,
) -> RenderResult<(&'a Expr, &'a Expr)> {
    let left = left
        .as_deref()
        .ok_or(RenderError::MissingOperand { node, side: "left" })?;
    let right = right
        .as_deref()
        .ok_or(RenderError::MissingOperand { node, side: "right" })?;
    Ok((left, right))
}

impl Render for And {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        let (left, right) = operands("AND", &self.left, &self.right)?;
        left.render(sink)?;
        sink.push_str(" AND ");
        right.render(sink)
    }
}

impl Render for Or {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        let (left, right) = operands("OR", &self.left, &self.right)?;
        sink.push_str("(");
        left.render(sink)?;
        sink.push_str(" OR ");
        right.render(sink)?;
        sink.push_str(")");
        Ok(())
    }
}

impl Render for Paren {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        let expr = self.expr.as_deref().ok_or(RenderError::MissingOperand {
            node: "parentheses",
            side: "inner",
        })?;
        sink.push_str("(");
        expr.render(sink)?;
        sink.push_str(")");
        Ok(())
    }
}
