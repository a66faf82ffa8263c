//! # pgquery
//!
//! A composable SQL statement builder for PostgreSQL.
//!
//! Statements are built from small options, each a function from the
//! statement so far to the updated statement. Nothing here talks to a
//! database: the output is a SQL string with `$1, $2, ...` placeholders and
//! the list of arguments to bind, ready to hand to `tokio-postgres`.
//!
//! ## Features
//!
//! - **Composable**: options are plain values; group them with [`options`],
//!   keep them around, apply them to several statements
//! - **Automatic grouping**: mixed `where_`/`or_where` calls are parenthesized
//!   at each switch between AND and OR
//! - **Nesting**: sub-selects and UNIONs embed as values, and their arguments
//!   are numbered once by the outermost statement
//! - **Permissive**: options that do not fit a statement are ignored rather
//!   than failing
//!
//! ## Example
//!
//! ```ignore
//! use pgquery::prelude::*;
//!
//! let q = select([
//!     columns(["*"]),
//!     from("posts"),
//!     where_("id", "IN", select([
//!         columns(["post_id"]),
//!         from("tags"),
//!         where_("name", "LIKE", arg("%sql%")),
//!     ])),
//!     order_desc(["created_at"]),
//! ]);
//!
//! let params = q.param_list();
//! let rows = client.query(&q.build(), &params.as_refs()).await?;
//! ```

pub mod clause;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod kind;
pub mod option;
pub mod param;
pub mod prelude;
pub mod query;

mod render;

pub use clause::{Clause, Conjunction, Direction};
pub use dialect::Dialect;
pub use error::{QbError, QbResult};
pub use expr::{Expr, arg, call, columns_list, count_of, ident, list, lit, lit_list, sum};
pub use kind::{ClauseKind, StatementKind};
pub use option::{
    QueryOption, alias, column_expr, columns, count, from, into, limit, offset, op, options, or,
    or_where, or_where_in, or_where_query, order_asc, order_desc, returning, set, set_expr,
    set_raw, table, values, where_, where_eq, where_in, where_in_raw, where_is, where_like,
    where_query,
};
pub use param::{Param, ParamList};
pub use query::{BuiltQuery, Query, delete, insert, select, union, update};
