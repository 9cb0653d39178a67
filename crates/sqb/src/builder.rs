//! Template builder: substitutes bound expressions for `?` markers.
//!
//! # Example
//!
//! ```
//! use sqb::{and, eq, limit, not_in, or};
//!
//! let q = sqb::new("SELECT * FROM t WHERE ? ?")
//!     .bind(and(or(eq("c", 1), eq("c", 2)), not_in("brand", ["apple", "sony"])))
//!     .bind(limit(10))
//!     .build()?;
//!
//! assert_eq!(q.sql, "SELECT * FROM t WHERE (c = ? OR c = ?) AND brand NOT IN (?, ?) LIMIT 10");
//! assert_eq!(q.args.len(), 4);
//! # Ok::<(), sqb::BuildError>(())
//! ```
//!
//! Every `?` in the template consumes exactly one bound expression, in bind
//! order, however many arguments that expression produces. There is no escape
//! for a literal `?`: any `?` in the template is treated as a marker.

use crate::config::{BuildConfig, PlaceholderStyle};
use crate::error::{BuildError, BuildResult};
use crate::render::{Render, Sink};
use crate::scratch;
use crate::stmt::Expr;
use crate::value::Value;
use std::sync::Arc;

/// The marker replaced by bound expressions.
pub const MARKER: char = '?';

/// A base query plus the expressions bound to its `?` markers.
///
/// Binding returns a new builder and leaves the original untouched, so a
/// partially bound builder can be reused as a prefix.
#[derive(Debug, Clone)]
#[must_use]
pub struct Builder {
    base: Arc<str>,
    stmts: Vec<Arc<Expr>>,
    config: BuildConfig,
}

/// Start a builder for `sql`.
pub fn new(sql: impl Into<String>) -> Builder {
    Builder::new(sql)
}

impl Builder {
    /// Create a builder for the base query `sql`.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            base: Arc::from(sql.into()),
            stmts: Vec::new(),
            config: BuildConfig::default(),
        }
    }

    /// Replace the build configuration.
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the placeholder style for arguments.
    pub fn placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.config.placeholder = style;
        self
    }

    /// Bind the next expression, returning a new builder.
    pub fn bind(&self, expr: impl Into<Expr>) -> Builder {
        let mut stmts = Vec::with_capacity(self.stmts.len() + 1);
        stmts.extend(self.stmts.iter().cloned());
        stmts.push(Arc::new(expr.into()));
        Builder {
            base: Arc::clone(&self.base),
            stmts,
            config: self.config.clone(),
        }
    }

    /// Bind an expression if there is one.
    ///
    /// `None` (e.g. [`and_from_map`](crate::and_from_map) over an empty map)
    /// binds nothing, so it consumes no marker.
    pub fn bind_opt(&self, expr: Option<impl Into<Expr>>) -> Builder {
        match expr {
            Some(expr) => self.bind(expr),
            None => self.clone(),
        }
    }

    /// Bind several expressions in order.
    pub fn bind_all<I>(&self, exprs: I) -> Builder
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let mut next = self.clone();
        next.stmts
            .extend(exprs.into_iter().map(|e| Arc::new(e.into())));
        next
    }

    /// The base query.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The bound expressions, in bind order.
    pub fn stmts(&self) -> &[Arc<Expr>] {
        &self.stmts
    }

    /// Number of bound expressions.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// The build configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the final SQL and its argument list.
    ///
    /// Fails with [`BuildError::BindingsExhausted`] if the base query has more
    /// markers than bound expressions, or [`BuildError::Render`] if a bound
    /// expression is incomplete. Extra bound expressions are ignored.
    pub fn build(&self) -> BuildResult<BuiltQuery> {
        let result = self.substitute();
        #[cfg(feature = "tracing")]
        self.trace_build(&result);
        result
    }

    #[cfg(feature = "tracing")]
    fn trace_build(&self, result: &BuildResult<BuiltQuery>) {
        let max = self.config.max_log_sql_length;
        match result {
            Ok(built) => tracing::debug!(
                target: "sqb.build",
                sql = %truncate_sql(&built.sql, max),
                bindings = self.stmts.len(),
                arg_count = built.args.len(),
                "built query"
            ),
            Err(err) => tracing::warn!(
                target: "sqb.build",
                base = %truncate_sql(&self.base, max),
                error = %err,
                "failed to build query"
            ),
        }
    }

    fn substitute(&self) -> BuildResult<BuiltQuery> {
        let mut buf = scratch::acquire(&self.config);

        let mut rest: &str = &self.base;
        let mut bound = 0;
        while let Some(i) = rest.find(MARKER) {
            let Some(stmt) = self.stmts.get(bound) else {
                return Err(BuildError::BindingsExhausted {
                    placeholder: bound + 1,
                    bindings: self.stmts.len(),
                });
            };

            buf.push_str(&rest[..i]);
            stmt.render(&mut *buf)
                .map_err(|source| BuildError::Render {
                    index: bound,
                    source,
                })?;
            bound += 1;
            rest = &rest[i + MARKER.len_utf8()..];
        }
        buf.push_str(rest);

        let (sql, args) = buf.finish();
        Ok(BuiltQuery { sql, args })
    }
}

/// The result of building a query.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    /// Split into SQL and arguments.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Get arguments as references for tokio-postgres.
    ///
    /// Build with [`PlaceholderStyle::Numbered`] so the SQL uses `$n`.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

#[cfg(feature = "tracing")]
fn truncate_sql(sql: &str, max: Option<usize>) -> std::borrow::Cow<'_, str> {
    match max {
        Some(max) if sql.chars().count() > max => {
            let cut: String = sql.chars().take(max).collect();
            std::borrow::Cow::Owned(format!("{cut}..."))
        }
        _ => std::borrow::Cow::Borrowed(sql),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eq, ne};

    #[test]
    fn replaces_markers_in_order() {
        let q = new("SELECT * FROM tables WHERE ? AND ?")
            .bind(eq("name", "taro"))
            .bind(ne("category", 10))
            .build()
            .unwrap();
        assert_eq!(q.sql, "SELECT * FROM tables WHERE name = ? AND category != ?");
        assert_eq!(q.args, vec![Value::from("taro"), Value::from(10)]);
    }

    #[test]
    fn template_without_markers_passes_through() {
        let q = new("SELECT 1").build().unwrap();
        assert_eq!(q.sql, "SELECT 1");
        assert!(q.args.is_empty());
    }

    #[test]
    fn marker_at_both_ends() {
        let q = new("? = ?").bind(crate::numeric(1)).bind(crate::numeric(2)).build().unwrap();
        assert_eq!(q.sql, "1 = 2");
    }

    #[test]
    fn multibyte_text_around_markers() {
        let q = new("SELECT '日本' WHERE ? -- ✓")
            .bind(eq("a", 1))
            .build()
            .unwrap();
        assert_eq!(q.sql, "SELECT '日本' WHERE a = ? -- ✓");
    }

    #[test]
    fn bind_all_keeps_order() {
        let q = new("? ?")
            .bind_all([eq("a", 1), eq("b", 2)])
            .build()
            .unwrap();
        assert_eq!(q.sql, "a = ? b = ?");
        assert_eq!(q.args, vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn bindings_exhausted_reports_position() {
        let err = new("? AND ?").bind(eq("a", 1)).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::BindingsExhausted {
                placeholder: 2,
                bindings: 1
            }
        );
        assert!(err.is_bindings_exhausted());
        assert!(err.render_error().is_none());
    }

    #[test]
    fn numbered_placeholders_span_bindings() {
        let q = new("SELECT * FROM t WHERE ? AND ?")
            .placeholder(PlaceholderStyle::Numbered)
            .bind(eq("a", 1))
            .bind(crate::in_list("b", [2, 3]))
            .build()
            .unwrap();
        assert_eq!(q.sql, "SELECT * FROM t WHERE a = $1 AND b IN ($2, $3)");
        assert_eq!(q.args.len(), 3);
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn params_ref_matches_args() {
        let q = new("?").bind(crate::in_list("id", [1, 2, 3])).build().unwrap();
        assert_eq!(q.params_ref().len(), 3);
    }
}
