//! Placeholder dialects.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How bound argument placeholders appear in the built SQL.
///
/// Can be read from application config:
///
/// ```ignore
/// #[derive(serde::Deserialize)]
/// struct DbConfig {
///     dialect: pgquery::Dialect, // "postgres" | "mysql"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Numbered placeholders: `$1, $2, ...`
    #[default]
    Postgres,
    /// Positional placeholders left as `?`.
    MySql,
}

impl Dialect {
    pub const fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        }
    }

    /// Whether `?` placeholders are rewritten to `$n`.
    pub const fn numbers_placeholders(self) -> bool {
        matches!(self, Dialect::Postgres)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}
