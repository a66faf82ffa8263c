//! Clause variants.
//!
//! A [`Clause`] is one fragment of a statement. It knows its kind tag, the
//! text it renders, the separator used when it follows another clause of the
//! same kind, and the arguments it binds.

use crate::expr::Expr;
use crate::kind::ClauseKind;
use crate::param::Param;
use crate::query::Query;

/// Conjunction joining WHERE predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    And,
    Or,
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A single clause of a statement.
#[derive(Clone, Debug)]
pub enum Clause {
    /// FROM / INTO / anonymous table name.
    Table { kind: ClauseKind, name: String },

    /// COLUMNS / RETURNING / VALUES items joined by `", "`.
    List {
        kind: ClauseKind,
        items: Vec<Expr>,
        wrap: bool,
    },

    /// WHERE or SET comparison: `column op value`.
    Predicate {
        kind: ClauseKind,
        column: String,
        op: String,
        value: Expr,
        conjunction: Conjunction,
    },

    /// ORDER BY columns with a direction.
    Order {
        columns: Vec<String>,
        direction: Direction,
    },

    /// LIMIT / OFFSET.
    Portion { kind: ClauseKind, n: i64 },

    /// `AS name`
    Alias(String),

    /// One member of a UNION.
    Union(Box<Query>),

    /// `COUNT(...)` through the kind table.
    Count(Vec<String>),
}

impl Clause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            Clause::Table { kind, .. }
            | Clause::List { kind, .. }
            | Clause::Predicate { kind, .. }
            | Clause::Portion { kind, .. } => *kind,
            Clause::Order { .. } => ClauseKind::Order,
            Clause::Alias(_) => ClauseKind::As,
            Clause::Union(_) => ClauseKind::Union,
            Clause::Count(_) => ClauseKind::Count,
        }
    }

    /// Text written between the previous same-kind clause and this one.
    pub fn separator(&self) -> &'static str {
        match self {
            Clause::Predicate {
                kind: ClauseKind::Where,
                conjunction,
                ..
            } => match conjunction {
                Conjunction::And => " AND ",
                Conjunction::Or => " OR ",
            },
            Clause::Predicate { .. }
            | Clause::Table { .. }
            | Clause::List { .. }
            | Clause::Order { .. }
            | Clause::Alias(_) => ", ",
            Clause::Union(_) => " UNION ",
            Clause::Portion { .. } | Clause::Count(_) => "",
        }
    }

    /// Write the clause text with raw `?` placeholders.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Clause::Table { name, .. } => out.push_str(name),
            Clause::List { items, wrap, .. } => {
                if *wrap {
                    out.push('(');
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.render_into(out);
                }
                if *wrap {
                    out.push(')');
                }
            }
            Clause::Predicate {
                column, op, value, ..
            } => {
                out.push_str(column);
                out.push(' ');
                out.push_str(op);
                out.push(' ');
                value.render_into(out);
            }
            Clause::Order { columns, direction } => {
                out.push_str(&columns.join(", "));
                out.push(' ');
                out.push_str(direction.as_str());
            }
            Clause::Portion { n, .. } => out.push_str(&n.to_string()),
            Clause::Alias(name) => out.push_str(name),
            Clause::Union(q) => out.push_str(&q.build_raw()),
            Clause::Count(items) => out.push_str(&items.join(", ")),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub(crate) fn collect_params(&self, out: &mut Vec<Param>) {
        match self {
            Clause::List { items, .. } => items.iter().for_each(|e| e.collect_params(out)),
            Clause::Predicate { value, .. } => value.collect_params(out),
            Clause::Union(q) => q.collect_params(out),
            Clause::Table { .. }
            | Clause::Order { .. }
            | Clause::Portion { .. }
            | Clause::Alias(_)
            | Clause::Count(_) => {}
        }
    }

    /// Copy of this clause joined by OR, if it is a WHERE predicate.
    pub(crate) fn or_joined(&self) -> Clause {
        match self {
            Clause::Predicate {
                kind: ClauseKind::Where,
                column,
                op,
                value,
                ..
            } => Clause::Predicate {
                kind: ClauseKind::Where,
                column: column.clone(),
                op: op.clone(),
                value: value.clone(),
                conjunction: Conjunction::Or,
            },
            other => other.clone(),
        }
    }
}
