//! Expression nodes.
//!
//! [`Expr`] is the closed set of nodes the builder knows how to substitute for
//! a `?` marker. Each variant wraps a node type that implements [`Render`];
//! [`Expr::Custom`] accepts anything else that does.
//!
//! Boolean nodes follow two fixed rules:
//! - AND never adds parentheses: `a AND b AND c`.
//! - OR always wraps itself: `((a OR b) OR c)` for a left-folded chain.
//!
//! Use [`Paren`] when an AND group must be protected inside something else.

mod columns;
mod condition;
mod conjunction;
mod literal;
mod order_by;


pub use columns::Columns;
pub use condition::{Comparison, Condition};
pub use conjunction::{And, Or, Paren};
pub use literal::{Limit, Literal, Numeric, Offset};
pub use order_by::OrderBy;

use crate::error::RenderResult;
use crate::render::{Render, Sink};
use std::sync::Arc;

/// Expression node bound to a `?` marker.
#[derive(Debug, Clone)]
pub enum Expr {
    /// `column <comparison>`
    Condition(Condition),
    /// `left AND right`
    And(And),
    /// `(left OR right)`
    Or(Or),
    /// `(expr)`
    Paren(Paren),
    /// `a, b, c`
    Columns(Columns),
    /// Raw text, e.g. a table name.
    Literal(Literal),
    /// An integer as text.
    Numeric(Numeric),
    /// `LIMIT n`
    Limit(Limit),
    /// `OFFSET n`
    Offset(Offset),
    /// `a, b DESC`
    OrderBy(OrderBy),
    /// Caller-defined node.
    Custom(Arc<dyn Render + Send + Sync>),
}

impl Expr {
    /// Wrap a caller-defined node.
    pub fn custom(node: impl Render + Send + Sync + 'static) -> Self {
        Expr::Custom(Arc::new(node))
    }

    /// `self AND rhs`
    pub fn and(self, rhs: impl Into<Expr>) -> Expr {
        Expr::And(And::new(self, rhs))
    }

    /// `(self OR rhs)`
    pub fn or(self, rhs: impl Into<Expr>) -> Expr {
        Expr::Or(Or::new(self, rhs))
    }

    /// `(self)`
    pub fn paren(self) -> Expr {
        Expr::Paren(Paren::new(self))
    }
}

impl Render for Expr {
    fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
        match self {
            Expr::Condition(c) => c.render(sink),
            Expr::And(a) => a.render(sink),
            Expr::Or(o) => o.render(sink),
            Expr::Paren(p) => p.render(sink),
            Expr::Columns(c) => c.render(sink),
            Expr::Literal(l) => l.render(sink),
            Expr::Numeric(n) => n.render(sink),
            Expr::Limit(l) => l.render(sink),
            Expr::Offset(o) => o.render(sink),
            Expr::OrderBy(o) => o.render(sink),
            Expr::Custom(c) => c.render(sink),
        }
    }
}

macro_rules! impl_into_expr {
    ($($node:ident),* $(,)?) => {
        $(
            impl From<$node> for Expr {
                fn from(node: $node) -> Self {
                    Expr::$node(node)
                }
            }
        )*
    };
}

impl_into_expr!(Condition, And, Or, Paren, Columns, Literal, Numeric, Limit, Offset, OrderBy);

impl From<Arc<dyn Render + Send + Sync>> for Expr {
    fn from(node: Arc<dyn Render + Send + Sync>) -> Self {
        Expr::Custom(node)
    }
}

impl From<Box<Expr>> for Expr {
    fn from(expr: Box<Expr>) -> Self {
        *expr
    }
}

/// Left-fold expressions with AND. Returns `None` for an empty input.
pub fn fold_and<I>(exprs: I) -> Option<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    exprs
        .into_iter()
        .map(Into::into)
        .reduce(|acc, next| acc.and(next))
}

/// Left-fold expressions with OR. Returns `None` for an empty input.
pub fn fold_or<I>(exprs: I) -> Option<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    exprs
        .into_iter()
        .map(Into::into)
        .reduce(|acc, next| acc.or(next))
}
