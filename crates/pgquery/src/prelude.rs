//! Convenient imports for typical `pgquery` usage.
//!
//! ```ignore
//! use pgquery::prelude::*;
//! ```

pub use crate::{
    Dialect, Expr, Param, QbError, QbResult, Query, QueryOption, alias, arg, call, column_expr,
    columns, count, count_of, delete, from, ident, insert, into, limit, list, lit, offset, op,
    options, or, or_where, or_where_in, or_where_query, order_asc, order_desc, returning, select,
    set, set_expr, set_raw, sum, table, union, update, values, where_, where_eq, where_in,
    where_in_raw, where_is, where_like, where_query,
};
