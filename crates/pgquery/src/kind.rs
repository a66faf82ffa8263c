//! Clause and statement kind tables.
//!
//! Everything here is fixed data: the keyword each kind writes, whether a
//! kind wraps its whole group in parentheses, and the rank that decides where
//! a kind sits inside a statement.

/// The SQL role a clause plays inside a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClauseKind {
    /// Anonymous table position (`UPDATE <table>`).
    Table,
    From,
    Into,
    Where,
    Order,
    Set,
    As,
    Limit,
    Offset,
    Values,
    Columns,
    Count,
    Returning,
    Union,
}

impl ClauseKind {
    /// Number of clause kinds.
    pub const COUNT: usize = 14;

    /// Keyword written before the first clause of this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            ClauseKind::From => "FROM ",
            ClauseKind::Into => "INTO ",
            ClauseKind::Where => "WHERE ",
            ClauseKind::Order => "ORDER BY ",
            ClauseKind::Set => "SET ",
            ClauseKind::As => "AS ",
            ClauseKind::Limit => "LIMIT ",
            ClauseKind::Offset => "OFFSET ",
            ClauseKind::Values => "VALUES ",
            ClauseKind::Count => "COUNT",
            ClauseKind::Returning => "RETURNING ",
            ClauseKind::Table | ClauseKind::Columns | ClauseKind::Union => "",
        }
    }

    /// Whether the contiguous group of this kind is wrapped in parentheses.
    pub const fn wraps_group(self) -> bool {
        matches!(self, ClauseKind::Where | ClauseKind::Count)
    }

    /// Position of this kind within a rendered statement.
    ///
    /// Kinds that never share a statement may share a rank.
    pub(crate) const fn rank(self) -> u8 {
        match self {
            ClauseKind::Table | ClauseKind::Into => 0,
            ClauseKind::Columns | ClauseKind::Count => 1,
            ClauseKind::As => 2,
            ClauseKind::From => 3,
            ClauseKind::Set => 4,
            ClauseKind::Values => 5,
            ClauseKind::Where => 6,
            ClauseKind::Union => 7,
            ClauseKind::Order => 8,
            ClauseKind::Limit => 9,
            ClauseKind::Offset => 10,
            ClauseKind::Returning => 11,
        }
    }

    /// Kinds that write into the SELECT projection list.
    pub(crate) const fn projects(self) -> bool {
        matches!(self, ClauseKind::Columns | ClauseKind::Count)
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// The statement a [`Query`](crate::Query) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatementKind {
    /// No leading keyword; used by [`union`](crate::union).
    #[default]
    None,
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// Leading keyword of the statement.
    pub const fn keyword(self) -> &'static str {
        match self {
            StatementKind::None => "",
            StatementKind::Select => "SELECT ",
            StatementKind::Insert => "INSERT ",
            StatementKind::Update => "UPDATE ",
            StatementKind::Delete => "DELETE ",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StatementKind::None => "NONE",
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }

    /// Statements that can carry a WHERE clause.
    pub(crate) const fn filters(self) -> bool {
        matches!(
            self,
            StatementKind::Select | StatementKind::Update | StatementKind::Delete
        )
    }

    /// Statements that can carry a RETURNING clause.
    pub(crate) const fn returns(self) -> bool {
        matches!(
            self,
            StatementKind::Insert | StatementKind::Update | StatementKind::Delete
        )
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
