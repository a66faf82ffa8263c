//! The statement value and its top-level constructors.

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::{QbError, QbResult};
use crate::kind::{ClauseKind, StatementKind};
use crate::option::QueryOption;
use crate::param::{Param, ParamList};
use crate::render::{count_placeholders, number_placeholders, render_raw};
use tokio_postgres::types::ToSql;

/// A SQL statement under construction.
///
/// `Query` is a plain value: every option takes it by value and returns the
/// updated statement, and cloning is cheap because bound arguments are shared
/// behind `Arc`. A partially built query can be cloned and used as a template
/// for several statements.
///
/// ```ignore
/// use pgquery::prelude::*;
///
/// let q = select([
///     columns(["*"]),
///     from("users"),
///     where_("username", "=", arg("me")),
/// ]);
/// assert_eq!(q.build(), "SELECT * FROM users WHERE (username = $1)");
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Query {
    stmt: StatementKind,
    clauses: Vec<Clause>,
}

impl Query {
    /// Create an empty statement of the given kind.
    pub fn new(stmt: StatementKind) -> Self {
        Self {
            stmt,
            clauses: Vec::new(),
        }
    }

    /// The statement kind.
    pub fn statement(&self) -> StatementKind {
        self.stmt
    }

    /// The clauses in render order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Apply one option, returning the updated statement.
    pub fn apply(self, opt: QueryOption) -> Self {
        opt.apply(self)
    }

    /// Apply options left to right.
    pub fn with(self, opts: impl IntoIterator<Item = QueryOption>) -> Self {
        opts.into_iter().fold(self, |q, opt| opt.apply(q))
    }

    /// Add a clause after every clause of the same or an earlier rank.
    ///
    /// This keeps same-kind clauses contiguous and in call order no matter
    /// how options were ordered.
    pub(crate) fn push_clause(mut self, clause: Clause) -> Self {
        let rank = clause.kind().rank();
        let at = self
            .clauses
            .iter()
            .rposition(|c| c.kind().rank() <= rank)
            .map_or(0, |i| i + 1);
        self.clauses.insert(at, clause);
        self
    }

    pub(crate) fn count_kind(&self, kind: ClauseKind) -> usize {
        self.clauses.iter().filter(|c| c.kind() == kind).count()
    }

    pub(crate) fn map_clauses(mut self, f: impl FnMut(&mut Clause)) -> Self {
        self.clauses.iter_mut().for_each(f);
        self
    }

    /// Render with raw `?` placeholders. Used when embedding this statement in
    /// another one; only the outermost statement numbers placeholders.
    pub fn build_raw(&self) -> String {
        render_raw(self.stmt, &self.clauses).trim().to_string()
    }

    /// Render the final SQL with `$1, $2, ...` placeholders.
    pub fn build(&self) -> String {
        self.build_with(Dialect::Postgres)
    }

    /// Render the final SQL with unnumbered `?` placeholders.
    pub fn build_mysql(&self) -> String {
        self.build_with(Dialect::MySql)
    }

    /// Render the final SQL for the given dialect.
    pub fn build_with(&self, dialect: Dialect) -> String {
        let raw = self.build_raw();
        let sql = if dialect.numbers_placeholders() {
            number_placeholders(&raw).0
        } else {
            raw
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "pgquery.sql",
            statement = %self.stmt,
            %dialect,
            param_count = self.args().len(),
            sql = %sql,
            "built statement"
        );

        sql
    }

    /// Bound arguments, parallel to the placeholders in [`build`](Query::build).
    pub fn args(&self) -> Vec<Param> {
        let mut out = Vec::new();
        self.collect_params(&mut out);
        out
    }

    pub(crate) fn collect_params(&self, out: &mut Vec<Param>) {
        self.clauses.iter().for_each(|c| c.collect_params(out));
    }

    /// Bound arguments collected into a [`ParamList`].
    pub fn param_list(&self) -> ParamList {
        self.args().into_iter().collect()
    }

    /// Check that the statement is non-empty and that its placeholders line up
    /// with its arguments.
    pub fn validate(&self) -> QbResult<()> {
        if self.clauses.is_empty() {
            return Err(QbError::EmptyStatement(self.stmt.to_string()));
        }
        let placeholders = count_placeholders(&self.build_raw());
        let params = self.args().len();
        if placeholders != params {
            return Err(QbError::placeholder_mismatch(placeholders, params));
        }
        Ok(())
    }

    /// Validate, then render into a [`BuiltQuery`] ready for a driver.
    pub fn to_built(&self) -> QbResult<BuiltQuery> {
        self.validate()?;
        Ok(BuiltQuery::new(self.build(), self.args()))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

/// The result of building a query: SQL text plus its arguments.
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, params: Vec<Param>) -> Self {
        Self { sql, params }
    }

    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

fn construct(
    stmt: StatementKind,
    head: Option<Clause>,
    opts: impl IntoIterator<Item = QueryOption>,
) -> Query {
    let q = Query::new(stmt);
    let q = match head {
        Some(clause) => q.push_clause(clause),
        None => q,
    };
    q.with(opts)
}

/// Create a SELECT statement.
///
/// # Example
/// ```ignore
/// let q = select([columns(["*"]), from("posts"), order_desc(["created_at"])]);
/// ```
pub fn select(opts: impl IntoIterator<Item = QueryOption>) -> Query {
    construct(StatementKind::Select, None, opts)
}

/// Create an INSERT statement targeting `table`.
///
/// # Example
/// ```ignore
/// let q = insert("users", [
///     columns(["email", "username"]),
///     values(["me@example.com", "me"]),
///     returning(["id"]),
/// ]);
/// ```
pub fn insert(table: impl Into<String>, opts: impl IntoIterator<Item = QueryOption>) -> Query {
    let head = Clause::Table {
        kind: ClauseKind::Into,
        name: table.into(),
    };
    construct(StatementKind::Insert, Some(head), opts)
}

/// Create an UPDATE statement for `table`.
pub fn update(table: impl Into<String>, opts: impl IntoIterator<Item = QueryOption>) -> Query {
    let head = Clause::Table {
        kind: ClauseKind::Table,
        name: table.into(),
    };
    construct(StatementKind::Update, Some(head), opts)
}

/// Create a DELETE statement for `table`.
pub fn delete(table: impl Into<String>, opts: impl IntoIterator<Item = QueryOption>) -> Query {
    let head = Clause::Table {
        kind: ClauseKind::From,
        name: table.into(),
    };
    construct(StatementKind::Delete, Some(head), opts)
}

/// Combine statements with UNION.
///
/// The result has no leading keyword; its arguments are the members'
/// arguments in order.
pub fn union(queries: impl IntoIterator<Item = Query>) -> Query {
    queries
        .into_iter()
        .fold(Query::new(StatementKind::None), |q, member| {
            q.push_clause(Clause::Union(Box::new(member)))
        })
}
