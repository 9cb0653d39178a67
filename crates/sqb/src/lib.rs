//! # sqb
//!
//! A composable SQL-fragment builder.
//!
//! Write the query yourself, mark the dynamic parts with `?`, and bind one
//! expression per marker. `build()` substitutes each expression's SQL and
//! collects its arguments in the order they appear in the final text.
//!
//! ## Features
//!
//! - **SQL explicit**: the base query is plain SQL; only the `?` markers change
//! - **Ordered arguments**: argument order always mirrors placeholder order
//! - **Variadic IN**: nested lists are flattened into one placeholder each
//! - **Immutable binding**: `bind` returns a new builder, the old one is untouched
//! - **Typed errors**: incomplete nodes fail the build instead of emitting bad SQL
//!
//! ## Example
//!
//! ```
//! use sqb::{and, columns, eq, in_list, like, or, order_by, order_by_list, table};
//!
//! let q = sqb::new("SELECT ? FROM ? WHERE ? ORDER BY ?")
//!     .bind(columns(["id", "name"]))
//!     .bind(table("users"))
//!     .bind(and(
//!         or(eq("role", "admin"), like("name", "a%")),
//!         in_list("status", vec![vec![1, 2], vec![3]]),
//!     ))
//!     .bind(order_by_list(order_by("name", false), [order_by("id", true)]))
//!     .build()?;
//!
//! assert_eq!(
//!     q.sql,
//!     "SELECT id, name FROM users WHERE (role = ? OR name LIKE ?) AND status IN (?, ?, ?) ORDER BY name, id DESC"
//! );
//! assert_eq!(q.args.len(), 5);
//! # Ok::<(), sqb::BuildError>(())
//! ```
//!
//! ## Cargo features
//!
//! - `postgres` (default): `Value` implements `tokio_postgres::types::ToSql`
//!   and [`BuiltQuery::params_ref`] hands arguments to a client.
//! - `tracing`: emit build events via `tracing` (target `sqb.build`).

#[macro_use]
mod macros;

pub mod builder;
pub mod config;
pub mod error;
pub mod helpers;
pub mod render;
pub mod scratch;
pub mod stmt;
pub mod value;

pub use builder::{Builder, BuiltQuery, new};
pub use config::{BuildConfig, PlaceholderStyle};
pub use error::{BuildError, BuildResult, RenderError, RenderResult};
pub use helpers::*;
pub use render::{Render, Sink};
pub use stmt::{
    And, Columns, Comparison, Condition, Expr, Limit, Literal, Numeric, Offset, Or, OrderBy, Paren,
    fold_and, fold_or,
};
pub use value::{Value, flatten};
