//! Shared clause capabilities.

use crate::stmt::fragment::Fragment;
use crate::stmt::Statement;
use crate::value::Value;

/// Column reference accepted by predicate and assignment helpers.
///
/// A bare `&str` is inserted verbatim; a `(table, column)` pair renders as
/// `table.column`. No quoting or escaping is applied; identifiers are the
/// caller's responsibility.
pub trait IntoColumn {
    fn into_column(self) -> String;
}

impl IntoColumn for &str {
    fn into_column(self) -> String {
        self.to_string()
    }
}

impl IntoColumn for String {
    fn into_column(self) -> String {
        self
    }
}

impl IntoColumn for (&str, &str) {
    fn into_column(self) -> String {
        format!("{}.{}", self.0, self.1)
    }
}

/// Raw escape hatches shared by every clause builder.
///
/// These mirror the statement-level `append` family but write into the
/// clause's active buffer: the WHERE clause's local buffer, or the owning
/// statement's buffer for the other clauses.
pub trait ClauseOps: Sized {
    /// The buffer this clause currently writes into.
    #[doc(hidden)]
    fn fragment_mut(&mut self) -> &mut Fragment;

    /// Hook invoked after a raw append, for clauses tracking emit state.
    #[doc(hidden)]
    fn raw_appended(&mut self) {}

    /// Append raw SQL text (padded with a space on each side) and bind
    /// values, in order.
    fn append(mut self, sql: &str, params: impl IntoIterator<Item = Value>) -> Self {
        let buf = self.fragment_mut();
        buf.push_padded(sql);
        buf.extend_values(params);
        self.raw_appended();
        self
    }

    /// Append another statement's rendered text, optionally parenthesized,
    /// and its parameters.
    fn append_statement(mut self, other: Statement, parenthesize: bool) -> Self {
        let (sql, params) = other.into_rendered_parts();
        let buf = self.fragment_mut();
        if parenthesize {
            buf.push(" (");
            buf.push(&sql);
            buf.push(") ");
        } else {
            buf.push_padded(&sql);
        }
        buf.extend_values(params);
        self.raw_appended();
        self
    }

    /// Open a literal parenthesis, for manual grouping where the structured
    /// helpers are not enough.
    fn lb(mut self) -> Self {
        self.fragment_mut().push(" ( ");
        self
    }

    /// Close a literal parenthesis.
    fn rb(mut self) -> Self {
        self.fragment_mut().push(" ) ");
        self
    }
}
