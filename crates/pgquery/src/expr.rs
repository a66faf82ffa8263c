//! Expression primitives.
//!
//! An [`Expr`] is one value-side fragment of SQL text together with the
//! arguments it binds. Expressions render raw `?` placeholders; numbering is
//! done once, by the outermost [`Query::build`](crate::Query::build).

use crate::param::Param;
use crate::query::Query;
use tokio_postgres::types::ToSql;

/// Expression node used as a predicate value, SET value or column item.
#[derive(Clone, Debug)]
pub enum Expr {
    /// Identifier written verbatim.
    Ident(String),

    /// Literal text embedded directly, never parameterized (`NOW()`, `NULL`).
    Lit(String),

    /// A single bound argument: `?`
    Arg(Param),

    /// A list of items joined by `", "`.
    ///
    /// `wrap` adds parentheses, as used by `IN (...)` and `VALUES (...)`.
    List {
        items: Vec<String>,
        params: Vec<Param>,
        wrap: bool,
    },

    /// Function call: `NAME(arg, ...)`
    Call { name: String, args: Vec<Expr> },

    /// A nested statement rendered in parentheses.
    Query(Box<Query>),
}

impl Expr {
    /// Render the expression with raw `?` placeholders.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Expr::Ident(s) | Expr::Lit(s) => out.push_str(s),
            Expr::Arg(_) => out.push('?'),
            Expr::List { items, wrap, .. } => {
                if *wrap {
                    out.push('(');
                }
                push_joined(out, items);
                if *wrap {
                    out.push(')');
                }
            }
            Expr::Call { name, args } => {
                out.push_str(name);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.render_into(out);
                }
                out.push(')');
            }
            Expr::Query(q) => {
                out.push('(');
                out.push_str(&q.build_raw());
                out.push(')');
            }
        }
    }

    /// Arguments bound by this expression, in placeholder order.
    pub fn params(&self) -> Vec<Param> {
        let mut out = Vec::new();
        self.collect_params(&mut out);
        out
    }

    pub(crate) fn collect_params(&self, out: &mut Vec<Param>) {
        match self {
            Expr::Ident(_) | Expr::Lit(_) => {}
            Expr::Arg(p) => out.push(p.clone()),
            Expr::List { params, .. } => out.extend(params.iter().cloned()),
            Expr::Call { args, .. } => args.iter().for_each(|a| a.collect_params(out)),
            Expr::Query(q) => q.collect_params(out),
        }
    }

    /// True for a list with no items.
    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::List { items, .. } if items.is_empty())
    }

    /// Wrap a bare argument as a one-element list, for `IN`-style operators.
    pub(crate) fn into_list(self) -> Self {
        match self {
            Expr::Arg(p) => Expr::List {
                items: vec!["?".to_string()],
                params: vec![p],
                wrap: true,
            },
            other => other,
        }
    }
}

impl From<Query> for Expr {
    fn from(q: Query) -> Self {
        Expr::Query(Box::new(q))
    }
}

impl From<Param> for Expr {
    fn from(p: Param) -> Self {
        Expr::Arg(p)
    }
}

fn push_joined(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item);
    }
}

/// Identifier expression, written exactly as given.
pub fn ident(name: impl Into<String>) -> Expr {
    Expr::Ident(name.into())
}

/// Literal expression. The value's `Display` output goes straight into the SQL.
///
/// ```ignore
/// where_("deleted_at", "IS NOT", lit("NULL"))
/// // WHERE (deleted_at IS NOT NULL)
/// ```
pub fn lit(value: impl std::fmt::Display) -> Expr {
    Expr::Lit(value.to_string())
}

/// Bound argument expression, rendered as a placeholder.
pub fn arg<T: ToSql + Send + Sync + 'static>(value: T) -> Expr {
    Expr::Arg(Param::new(value))
}

/// Parenthesized list of bound arguments: `(?, ?, ?)`.
pub fn list<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Param>,
{
    let params: Vec<Param> = values.into_iter().map(Into::into).collect();
    Expr::List {
        items: vec!["?".to_string(); params.len()],
        params,
        wrap: true,
    }
}

/// Parenthesized list of literals, written into the SQL unbound: `(1, 2, 3)`.
pub fn lit_list<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    Expr::List {
        items: values.into_iter().map(|v| v.to_string()).collect(),
        params: Vec::new(),
        wrap: true,
    }
}

/// Unwrapped list of column names: `a, b, c`.
pub fn columns_list<I>(cols: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Expr::List {
        items: cols.into_iter().map(Into::into).collect(),
        params: Vec::new(),
        wrap: false,
    }
}

/// Function call expression.
pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Call {
        name: name.into(),
        args: args.into_iter().collect(),
    }
}

/// `SUM(col)`
pub fn sum(col: impl Into<String>) -> Expr {
    call("SUM", [lit(col.into())])
}

/// `COUNT(cols...)` as an expression, e.g. for use inside another call.
pub fn count_of<I>(cols: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    call("COUNT", cols.into_iter().map(|c| lit(c.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_and_lit_bind_nothing() {
        assert_eq!(ident("users.id").render(), "users.id");
        assert_eq!(lit("NOW()").render(), "NOW()");
        assert_eq!(lit(42).render(), "42");
        assert!(ident("x").params().is_empty());
        assert!(lit("NULL").params().is_empty());
    }

    #[test]
    fn arg_binds_one_value() {
        let e = arg("me");
        assert_eq!(e.render(), "?");
        assert_eq!(e.params().len(), 1);
    }

    #[test]
    fn list_wraps_placeholders() {
        let e = list([1, 2, 3]);
        assert_eq!(e.render(), "(?, ?, ?)");
        assert_eq!(e.params().len(), 3);
        assert!(!e.is_empty());
        assert!(list(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn columns_list_is_unwrapped() {
        let e = columns_list(["id", "email"]);
        assert_eq!(e.render(), "id, email");
        assert!(e.params().is_empty());
    }

    #[test]
    fn call_concatenates_argument_params() {
        let e = call("COALESCE", [arg(1i32), lit("NULL"), arg("x")]);
        assert_eq!(e.render(), "COALESCE(?, NULL, ?)");
        let params: Vec<String> = e.params().iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(params, ["1", "\"x\""]);
    }

    #[test]
    fn aggregate_helpers() {
        assert_eq!(sum("size").render(), "SUM(size)");
        assert_eq!(count_of(["*"]).render(), "COUNT(*)");
    }

    #[test]
    fn single_arg_becomes_list() {
        assert_eq!(arg(1i32).into_list().render(), "(?)");
        assert_eq!(lit("NULL").into_list().render(), "NULL");
    }
}
