//! Options: composable statement transformers.
//!
//! Every option takes the statement built so far and returns the updated
//! statement. Options that do not apply to the statement kind they are given
//! (for example [`from`] on an INSERT) leave it unchanged.
//!
//! # Example
//! ```ignore
//! use pgquery::prelude::*;
//!
//! fn search(col: &str, pattern: &str) -> QueryOption {
//!     if pattern.is_empty() {
//!         return options([]);
//!     }
//!     where_(col, "LIKE", arg(format!("%{pattern}%")))
//! }
//!
//! let q = select([
//!     columns(["*"]),
//!     from("posts"),
//!     search("title", "query builder"),
//!     order_desc(["created_at"]),
//! ]);
//! ```

use crate::clause::{Clause, Conjunction, Direction};
use crate::expr::{Expr, ident, lit};
use crate::kind::{ClauseKind, StatementKind};
use crate::param::Param;
use crate::query::Query;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// Comparison operators accepted by [`where_`] and friends.
pub mod op {
    pub const EQ: &str = "=";
    pub const NOT_EQ: &str = "!=";
    pub const GT: &str = ">";
    pub const GT_OR_EQ: &str = ">=";
    pub const LT: &str = "<";
    pub const LT_OR_EQ: &str = "<=";
    pub const LIKE: &str = "LIKE";
    pub const ILIKE: &str = "ILIKE";
    pub const IS: &str = "IS";
    pub const IS_NOT: &str = "IS NOT";
    pub const IN: &str = "IN";
    pub const NOT_IN: &str = "NOT IN";
}

/// A statement transformer.
///
/// Cloning is cheap and an option can be applied any number of times, so
/// options can be kept around and shared between statements.
#[derive(Clone)]
pub struct QueryOption(Arc<dyn Fn(Query) -> Query + Send + Sync>);

impl QueryOption {
    /// Wrap a closure as an option.
    pub fn new(f: impl Fn(Query) -> Query + Send + Sync + 'static) -> Self {
        QueryOption(Arc::new(f))
    }

    /// Apply the option to a statement.
    pub fn apply(&self, q: Query) -> Query {
        (self.0)(q)
    }

    /// Only apply when the statement is one of `kinds`.
    fn only(
        kinds: &'static [StatementKind],
        f: impl Fn(Query) -> Query + Send + Sync + 'static,
    ) -> Self {
        QueryOption::new(move |q| {
            if kinds.contains(&q.statement()) {
                f(q)
            } else {
                q
            }
        })
    }
}

impl std::fmt::Debug for QueryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("QueryOption").field(&"<fn>").finish()
    }
}

const SELECT: &[StatementKind] = &[StatementKind::Select];
const INSERT: &[StatementKind] = &[StatementKind::Insert];
const UPDATE: &[StatementKind] = &[StatementKind::Update];
const SELECT_INSERT: &[StatementKind] = &[StatementKind::Select, StatementKind::Insert];
const SELECT_DELETE: &[StatementKind] = &[StatementKind::Select, StatementKind::Delete];

/// Fold several options into one, applied left to right.
pub fn options(opts: impl IntoIterator<Item = QueryOption>) -> QueryOption {
    let opts: Vec<QueryOption> = opts.into_iter().collect();
    QueryOption::new(move |q| opts.iter().fold(q, |q, opt| opt.apply(q)))
}

// -- columns --

/// Column list.
///
/// On SELECT this is the projection. On INSERT it is the parenthesized target
/// column group: `INSERT INTO users (email, username)`.
pub fn columns<I>(cols: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let items: Vec<Expr> = cols.into_iter().map(ident).collect();
    QueryOption::only(SELECT_INSERT, move |q| {
        if items.is_empty() {
            return q;
        }
        let wrap = q.statement() == StatementKind::Insert;
        q.push_clause(Clause::List {
            kind: ClauseKind::Columns,
            items: items.clone(),
            wrap,
        })
    })
}

/// Projection built from an expression, e.g. `column_expr(sum("size"))`.
pub fn column_expr(expr: impl Into<Expr>) -> QueryOption {
    let expr = expr.into();
    QueryOption::only(SELECT, move |q| {
        q.push_clause(Clause::List {
            kind: ClauseKind::Columns,
            items: vec![expr.clone()],
            wrap: false,
        })
    })
}

/// `COUNT(cols)` projection.
pub fn count<I>(cols: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let cols: Vec<String> = cols.into_iter().map(Into::into).collect();
    QueryOption::only(SELECT, move |q| q.push_clause(Clause::Count(cols.clone())))
}

/// `AS name` after the projection.
pub fn alias(name: impl Into<String>) -> QueryOption {
    let name = name.into();
    QueryOption::only(SELECT, move |q| q.push_clause(Clause::Alias(name.clone())))
}

// -- tables --

/// `FROM table` for SELECT and DELETE.
pub fn from(table: impl Into<String>) -> QueryOption {
    table_clause(ClauseKind::From, SELECT_DELETE, table.into())
}

/// `INTO table` for INSERT.
pub fn into(table: impl Into<String>) -> QueryOption {
    table_clause(ClauseKind::Into, INSERT, table.into())
}

/// Anonymous table position used by UPDATE.
pub fn table(name: impl Into<String>) -> QueryOption {
    table_clause(ClauseKind::Table, UPDATE, name.into())
}

fn table_clause(kind: ClauseKind, on: &'static [StatementKind], name: String) -> QueryOption {
    QueryOption::only(on, move |q| {
        q.push_clause(Clause::Table {
            kind,
            name: name.clone(),
        })
    })
}

// -- where --

fn is_in_op(operator: &str) -> bool {
    let operator = operator.trim();
    operator.eq_ignore_ascii_case(op::IN) || operator.eq_ignore_ascii_case(op::NOT_IN)
}

fn predicate(
    conjunction: Conjunction,
    column: String,
    operator: String,
    value: Expr,
) -> QueryOption {
    // An empty IN list would render `IN ()`; drop the predicate instead.
    if value.is_empty() {
        return options([]);
    }
    let value = if is_in_op(&operator) {
        value.into_list()
    } else {
        value
    };

    QueryOption::new(move |q| {
        if !q.statement().filters() {
            return q;
        }
        q.push_clause(Clause::Predicate {
            kind: ClauseKind::Where,
            column: column.clone(),
            op: operator.clone(),
            value: value.clone(),
            conjunction,
        })
    })
}

/// WHERE predicate joined with AND.
///
/// ```ignore
/// where_("username", "=", arg("me"))
/// where_("id", "IN", list([1, 2, 3]))
/// where_("deleted_at", "IS", lit("NULL"))
/// where_("id", "IN", select([columns(["post_id"]), from("tags")]))
/// ```
pub fn where_(
    column: impl Into<String>,
    op: impl Into<String>,
    value: impl Into<Expr>,
) -> QueryOption {
    predicate(Conjunction::And, column.into(), op.into(), value.into())
}

/// WHERE predicate joined with OR.
pub fn or_where(
    column: impl Into<String>,
    op: impl Into<String>,
    value: impl Into<Expr>,
) -> QueryOption {
    predicate(Conjunction::Or, column.into(), op.into(), value.into())
}

/// WHERE predicate whose value is a nested statement.
pub fn where_query(column: impl Into<String>, op: impl Into<String>, query: Query) -> QueryOption {
    where_(column, op, query)
}

/// OR-joined WHERE predicate whose value is a nested statement.
pub fn or_where_query(
    column: impl Into<String>,
    op: impl Into<String>,
    query: Query,
) -> QueryOption {
    or_where(column, op, query)
}

/// `column = ?`
pub fn where_eq<T>(column: impl Into<String>, value: T) -> QueryOption
where
    T: ToSql + Send + Sync + 'static,
{
    where_(column, op::EQ, Param::new(value))
}

/// `column LIKE ?`
pub fn where_like<T>(column: impl Into<String>, pattern: T) -> QueryOption
where
    T: ToSql + Send + Sync + 'static,
{
    where_(column, op::LIKE, Param::new(pattern))
}

/// `column IS <literal>`, e.g. `where_is("parent_id", "NULL")`.
pub fn where_is(column: impl Into<String>, value: impl std::fmt::Display) -> QueryOption {
    where_(column, op::IS, lit(value))
}

/// `column IN (?, ...)`; no-op for an empty list.
pub fn where_in<I>(column: impl Into<String>, values: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Param>,
{
    where_(column, op::IN, crate::expr::list(values))
}

/// OR-joined `column IN (?, ...)`; no-op for an empty list.
pub fn or_where_in<I>(column: impl Into<String>, values: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Param>,
{
    or_where(column, op::IN, crate::expr::list(values))
}

/// `column IN (a, b, ...)` with the values written into the SQL unbound.
///
/// No-op for an empty list.
pub fn where_in_raw<I>(column: impl Into<String>, values: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    where_(column, op::IN, crate::expr::lit_list(values))
}

/// Apply `opts` and join every WHERE predicate they add with OR.
///
/// ```ignore
/// select([
///     columns(["*"]),
///     from("users"),
///     where_eq("active", true),
///     or([where_eq("role", "admin"), where_eq("role", "owner")]),
/// ])
/// // ... WHERE (active = $1 OR role = $2 OR role = $3)
/// ```
pub fn or(opts: impl IntoIterator<Item = QueryOption>) -> QueryOption {
    let inner = options(opts);
    QueryOption::new(move |q| {
        let before = q.count_kind(ClauseKind::Where);
        let mut seen = 0usize;
        inner.apply(q).map_clauses(|c| {
            if c.kind() == ClauseKind::Where {
                if seen >= before {
                    *c = c.or_joined();
                }
                seen += 1;
            }
        })
    })
}

// -- set --

fn set_clause(column: String, value: Expr) -> QueryOption {
    QueryOption::only(UPDATE, move |q| {
        q.push_clause(Clause::Predicate {
            kind: ClauseKind::Set,
            column: column.clone(),
            op: op::EQ.to_string(),
            value: value.clone(),
            conjunction: Conjunction::And,
        })
    })
}

/// `SET column = ?` with the value bound.
pub fn set<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> QueryOption {
    set_clause(column.into(), Expr::Arg(Param::new(value)))
}

/// `SET column = <literal>`, e.g. `set_raw("updated_at", "NOW()")`.
pub fn set_raw(column: impl Into<String>, value: impl std::fmt::Display) -> QueryOption {
    set_clause(column.into(), lit(value))
}

/// `SET column = <expr>`
pub fn set_expr(column: impl Into<String>, value: impl Into<Expr>) -> QueryOption {
    set_clause(column.into(), value.into())
}

// -- values --

/// One parenthesized VALUES group. Call again for each extra row.
pub fn values<I>(vals: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<Param>,
{
    let items: Vec<Expr> = vals.into_iter().map(|v| Expr::Arg(v.into())).collect();
    QueryOption::only(INSERT, move |q| {
        if items.is_empty() {
            return q;
        }
        q.push_clause(Clause::List {
            kind: ClauseKind::Values,
            items: items.clone(),
            wrap: true,
        })
    })
}

// -- ordering and portions --

fn order(direction: Direction, columns: Vec<String>) -> QueryOption {
    QueryOption::new(move |q| {
        if columns.is_empty() {
            return q;
        }
        q.push_clause(Clause::Order {
            columns: columns.clone(),
            direction,
        })
    })
}

/// `ORDER BY cols ASC`
pub fn order_asc<I>(cols: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    order(Direction::Asc, cols.into_iter().map(Into::into).collect())
}

/// `ORDER BY cols DESC`
pub fn order_desc<I>(cols: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    order(Direction::Desc, cols.into_iter().map(Into::into).collect())
}

/// `LIMIT n`
pub fn limit(n: i64) -> QueryOption {
    QueryOption::new(move |q| {
        q.push_clause(Clause::Portion {
            kind: ClauseKind::Limit,
            n,
        })
    })
}

/// `OFFSET n`
pub fn offset(n: i64) -> QueryOption {
    QueryOption::new(move |q| {
        q.push_clause(Clause::Portion {
            kind: ClauseKind::Offset,
            n,
        })
    })
}

// -- returning --

/// `RETURNING cols` for INSERT, UPDATE and DELETE.
pub fn returning<I>(cols: I) -> QueryOption
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let items: Vec<Expr> = cols.into_iter().map(ident).collect();
    QueryOption::new(move |q| {
        if items.is_empty() || !q.statement().returns() {
            return q;
        }
        q.push_clause(Clause::List {
            kind: ClauseKind::Returning,
            items: items.clone(),
            wrap: false,
        })
    })
}
